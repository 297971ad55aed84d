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

//! padding of images to a given aspect ratio.
//! Images are centered on a solid canvas that has the requested aspect ratio, the result can be rescaled
//! to a standard short side length and get a caption before it is stored next to the input file

use std::path::{Path,PathBuf};
use chrono::{DateTime, TimeZone};
use image::{DynamicImage, GenericImageView, RgbImage};
use serde::{Deserialize,Serialize};
use tracing::{debug,info};

use odin_build::define_load_config;
use odin_common::{datetime::{compact_datetime_string, local_now}, fs::append_to_filestem};

mod errors;
pub use errors::{Result,OdinPadError};

mod ratio;
pub use ratio::AspectRatio;

mod canvas;
pub use canvas::*;

mod caption;
pub use caption::*;

define_load_config!{}

/// name of the config file we look up in the ODIN config dirs
pub const PAD_CONFIG_FILE: &'static str = "pad_image.ron";

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// target length of the shorter image side when rescaling
    pub short_side: u32,
    pub caption: CaptionStyle,
}

impl Default for PadConfig {
    fn default()->Self {
        PadConfig { short_side: DEFAULT_SHORT_SIDE, caption: CaptionStyle::default() }
    }
}

/// load the PadConfig from `filename`, falling back to defaults if there is no such config file
pub fn load_pad_config (filename: &str)->Result<PadConfig> {
    match load_config::<PadConfig>( filename) {
        Ok(config) => Ok(config),
        Err(e) if e.is_not_found() => {
            debug!("no {} config found, using defaults", filename);
            Ok( PadConfig::default() )
        }
        Err(e) => Err(e.into())
    }
}

/// what to do with a single image
#[derive(Debug,Clone)]
pub struct PadRequest {
    pub ratio: AspectRatio,
    pub color: PadColor,
    pub padding: f64,
    pub rescale: bool,
    pub caption: String,
    pub font: Option<PathBuf>,
}

impl PadRequest {
    /// plain padding without rescaling or caption
    pub fn new (ratio: AspectRatio, color: PadColor)->Self {
        PadRequest { ratio, color, padding: 0.0, rescale: false, caption: String::new(), font: None }
    }
}

/// derive the output path "<stem>-<w>x<h>-<YYYYmmddHHMMSS>.<ext>" next to the input file
pub fn output_path<Tz> (input: impl AsRef<Path>, ratio: &AspectRatio, dt: &DateTime<Tz>)->PathBuf
    where Tz: TimeZone, Tz::Offset: std::fmt::Display
{
    let suffix = format!("-{}-{}", ratio.filename_tag(), compact_datetime_string(dt));
    append_to_filestem( input, &suffix)
}

/// center the image on a canvas with the requested aspect ratio and padding
pub fn pad_image (img: &DynamicImage, ratio: &AspectRatio, padding: f64, color: PadColor)->Result<RgbImage> {
    let size = img.dimensions();
    let canvas_size = padded_size( size, ratio, padding)?;
    info!("padding {}x{} image to {}x{} (ratio {}, padding {})", size.0, size.1, canvas_size.0, canvas_size.1, ratio, padding);

    Ok( compose_centered( img, canvas_size, color) )
}

/// run the whole in-memory pipeline: pad, optionally rescale, optionally draw caption
pub fn process_image (img: &DynamicImage, req: &PadRequest, config: &PadConfig)->Result<RgbImage> {
    let mut out_img = pad_image( img, &req.ratio, req.padding, req.color)?;

    if req.rescale {
        out_img = rescale_short_side( &out_img, config.short_side)?;
    }

    if !req.caption.is_empty() {
        let font = resolve_font( req.font.as_deref(), config.caption.font.as_deref())?;
        draw_caption( &mut out_img, &req.caption, &font, &config.caption)?;
    }

    Ok( out_img )
}

/// load image from `path`, process it and store the result in a derived output file, the path of which
/// is returned. Output format is determined by the extension of the input path
pub fn pad_image_file (path: impl AsRef<Path>, req: &PadRequest, config: &PadConfig)->Result<PathBuf> {
    let path = path.as_ref();

    let img = image::open( path).map_err( |e| OdinPadError::ImageDecodeError( path.display().to_string(), e))?;
    let out_img = process_image( &img, req, config)?;

    let out_path = output_path( path, &req.ratio, &local_now());
    save_image( &out_img, &out_path)?;

    Ok( out_path )
}

/// store image in `out_path`, using the format implied by its extension
pub fn save_image (img: &RgbImage, out_path: &Path)->Result<()> {
    img.save( out_path).map_err( |e| OdinPadError::ImageEncodeError( out_path.display().to_string(), e))?;
    info!("saved {}", out_path.display());
    Ok(())
}
