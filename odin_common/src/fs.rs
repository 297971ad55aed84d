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

use std::fs::File;
use std::io::{Read,ErrorKind};
use std::path::{Path,PathBuf};

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

/// return a sibling path of `path` that has `suffix` inserted between the file stem and the (last) extension:
/// `/a/b/photo.jpg` + `-x` -> `/a/b/photo-x.jpg`. Paths without extension just get the suffix appended
pub fn append_to_filestem (path: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let path = path.as_ref();

    let mut fname = path.file_stem().map( |s| s.to_os_string()).unwrap_or_default();
    fname.push( suffix);
    if let Some(ext) = path.extension() {
        fname.push(".");
        fname.push( ext);
    }

    path.with_file_name( fname)
}

pub fn filepath_contents <P: AsRef<Path>> (path: &P) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let md = file.metadata()?;
    let len = md.len();
    if len > 0 {
        let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
        file.read_to_end(&mut contents)?;
        Ok(contents)

    } else { Err(io_error!(ErrorKind::Other, "file empty: {:?}", path.as_ref())) }
}
