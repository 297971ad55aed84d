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
use odin_pad::{check_padding, load_pad_config, pad_image_file, AspectRatio, PadColor, PadRequest, PAD_CONFIG_FILE};

define_cli! { ARGS [about="pad image to aspect ratio, rescale it to the configured short side and draw optional caption"] =
    ratio: String [help="aspect ratio in \"width:height\" format, e.g. \"16:9\"", long, default_value="1:1"],
    color: String [help="color to pad with: \"white\" or \"black\"", long, default_value="white"],
    padding: f64 [help="fraction of additional padding around the image [0..1)", long, default_value="0.0"],
    caption: String [help="caption to draw near the bottom (none if empty)", long, default_value=""],
    font: Option<PathBuf> [help="font file to use for caption (overrides configured font)", long],
    keep_size: bool [help="do not rescale the padded image", long],
    path: PathBuf [help="path to the image file"]
}

fn main() -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let ratio: AspectRatio = ARGS.ratio.parse()?;
    let color: PadColor = ARGS.color.parse()?;
    check_padding( ARGS.padding)?;
    let config = load_pad_config( PAD_CONFIG_FILE)?;

    let req = PadRequest {
        ratio,
        color,
        padding: ARGS.padding,
        rescale: !ARGS.keep_size,
        caption: ARGS.caption.clone(),
        font: ARGS.font.clone(),
    };

    let out_path = pad_image_file( &ARGS.path, &req, &config)?;
    println!("{}", out_path.display());

    Ok(())
}
