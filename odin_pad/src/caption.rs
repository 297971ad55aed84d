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

use std::path::{Path,PathBuf};
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use serde::{Deserialize,Serialize};
use tracing::{debug,info};

use odin_build::pkg_data_file;
use odin_common::fs::filepath_contents;
use crate::errors::{OdinPadError, Result};

/* #region font resources ************************************************************************************************/

static BUNDLED_FONT: &'static [u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// the font compiled into the binary, used if nothing else is configured
pub fn bundled_font ()->Result<FontArc> {
    Ok( FontArc::try_from_slice( BUNDLED_FONT)? )
}

pub fn load_font_file (path: &Path)->Result<FontArc> {
    if !path.is_file() {
        Err( OdinPadError::ResourceUnavailable( format!("font not found: {}", path.display())) )

    } else if path.metadata()?.len() == 0 {
        Err( OdinPadError::ResourceUnavailable( format!("font file empty: {}", path.display())) )

    } else {
        let data = filepath_contents( &path)?;
        Ok( FontArc::try_from_vec( data)? )
    }
}

/// resolve the caption font. An explicit font path takes precedence over the configured font, which is
/// either a path or the name of a file in the crate data dir (e.g. `$ODIN_ROOT/data/odin_pad/`, see
/// `odin_build::find_resource_file` for the full lookup order).
/// Without either we fall back to the bundled font
pub fn resolve_font (explicit: Option<&Path>, configured: Option<&str>)->Result<FontArc> {
    if let Some(path) = explicit {
        debug!("loading caption font {}", path.display());
        return load_font_file( path)
    }

    if let Some(font_name) = configured {
        let path = PathBuf::from( font_name);
        if path.is_file() {
            debug!("loading configured caption font {}", path.display());
            return load_font_file( &path)
        }
        return match pkg_data_file!( font_name) {
            Some(path) => {
                debug!("loading caption font {} from data dir", path.display());
                load_font_file( &path)
            }
            None => Err( OdinPadError::ResourceUnavailable( format!("font not found: {}", font_name)) )
        }
    }

    debug!("using bundled caption font");
    bundled_font()
}

/* #endregion font resources */

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// font file path or name of font file in data dir. Bundled font if not set
    pub font: Option<String>,
    pub font_size: f32,
    pub color: (u8,u8,u8),
    /// distance in pixels of the caption center from the bottom edge
    pub bottom_offset: u32,
}

impl Default for CaptionStyle {
    fn default()->Self {
        CaptionStyle {
            font: None,
            font_size: 64.0,
            color: (128, 128, 128),
            bottom_offset: 100,
        }
    }
}

impl CaptionStyle {
    pub fn rgb (&self)->Rgb<u8> {
        Rgb([self.color.0, self.color.1, self.color.2])
    }
}

/// top left draw position of a single line text that is centered on (cx,cy). Vertical centering
/// uses the middle between ascender and descender, not the glyph bounds of the actual text
pub fn caption_origin (font: &FontArc, scale: PxScale, text: &str, cx: i32, cy: i32)->(i32,i32) {
    let (w, _) = text_size( scale, font, text);
    let scaled = font.as_scaled( scale);
    let line_height = scaled.ascent() - scaled.descent();

    ( cx - (w as i32) / 2, cy - (line_height / 2.0).round() as i32 )
}

/// draw caption horizontally centered and `style.bottom_offset` pixels above the bottom edge.
/// Empty captions are ignored
pub fn draw_caption (img: &mut RgbImage, text: &str, font: &FontArc, style: &CaptionStyle)->Result<()> {
    if text.is_empty() { return Ok(()) }

    let scale = font.pt_to_px_scale( style.font_size)
        .ok_or( OdinPadError::IllegalArgument( format!("invalid font size {}", style.font_size)))?;

    let (w, h) = img.dimensions();
    let cx = (w / 2) as i32;
    let cy = h as i32 - style.bottom_offset as i32;
    let (x, y) = caption_origin( font, scale, text, cx, cy);

    info!("drawing caption \"{}\" at {},{}", text, x, y);
    draw_text_mut( img, style.rgb(), x, y, scale, font, text);

    Ok(())
}
