/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

use std::path::PathBuf;
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use odin_common::{define_cli, check_cli};
use odin_pad::{pad_image_file, AspectRatio, PadColor, PadConfig, PadRequest};

define_cli! { ARGS [about="pad image with a solid color to the given aspect ratio"] =
    color: String [help="color to pad with: \"white\" or \"black\"", long, default_value="white"],
    path: PathBuf [help="path to the image file"],
    ratio: String [help="aspect ratio in \"width:height\" format, e.g. \"16:9\""]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let ratio: AspectRatio = ARGS.ratio.parse()?;
    let color: PadColor = ARGS.color.parse()?;

    let req = PadRequest::new( ratio, color);
    let out_path = pad_image_file( &ARGS.path, &req, &PadConfig::default())?;
    println!("{}", out_path.display());

    Ok(())
}
