/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! runtime resource lookup for ODIN crates.
//! Resources (configs, data files such as fonts) are looked up outside of the source repo first, then
//! within the sources of the crate that defines them

use std::{env, path::{Path,PathBuf}};

mod configs;
pub use configs::*;

mod utils;
pub use utils::*;

mod errors;
pub use errors::*;

pub const DATA: &'static str = "data";

/* #region resource lookup ***************************************************************/

/// locate a resource file and return its PathBuf. Lookup order is
///
/// 1. `$ODIN_ROOT/<resource_dir>/<resource_crate>/<filename>`
/// 2. `$ODIN_HOME/<resource_dir>/<resource_crate>/<filename>`
/// 3. `<workspace-parent>/<resource_dir>/<resource_crate>/<filename>` (first dir outside the source repo)
/// 4. `$HOME/.odin/<resource_dir>/<resource_crate>/<filename>`
/// 5. `<workspace>/<resource_crate>/<resource_dir>/<filename>` (shipped with the crate sources)
pub fn find_resource_file (resource_dir: &str, resource_crate: &str, filename: &str) -> Option<PathBuf> {
    if let Some(mut path) = get_env_odin_root() {
        if find_external_resource( &mut path, resource_dir, resource_crate, filename) { return Some(path) }
    }

    if let Ok(odin_home) = env::var("ODIN_HOME") {
        let mut path = Path::new( odin_home.as_str()).to_path_buf();
        if find_external_resource( &mut path, resource_dir, resource_crate, filename) { return Some(path) }
    }

    if let Some(mut path) = get_workspace_parent() {
        if find_external_resource( &mut path, resource_dir, resource_crate, filename) { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let mut path = Path::new(usr_home.as_str()).to_path_buf();
        path.push(".odin");
        if find_external_resource( &mut path, resource_dir, resource_crate, filename) { return Some(path) }
    }

    if let Some(mut path) = get_workspace_dir() {
        if find_internal_resource( &mut path, resource_dir, resource_crate, filename) { return Some(path) }
    }

    None
}

fn find_external_resource (path: &mut PathBuf, resource_dir: &str, resource_crate: &str, filename: &str)->bool {
    path_cond!( is_file, path, resource_dir, resource_crate, filename)
}

fn find_internal_resource (path: &mut PathBuf, resource_dir: &str, resource_crate: &str, filename: &str)->bool {
    path_cond!( is_file, path, resource_crate, resource_dir, filename)
}

pub fn find_data_file (resource_crate: &str, filename: &str) -> Option<PathBuf> {
    find_resource_file( DATA, resource_crate, filename)
}

/// look up a data file of the calling crate (e.g. `$ODIN_ROOT/data/<crate>/<filename>`, see [`find_resource_file`]).
/// This is a macro so that it uses the crate name of the caller source
#[macro_export]
macro_rules! pkg_data_file {
    ($filename:expr) => {
        odin_build::find_data_file( env!("CARGO_PKG_NAME"), $filename)
    }
}

/* #endregion resource lookup */
