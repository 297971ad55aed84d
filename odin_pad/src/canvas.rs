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

use std::str::FromStr;
use image::{imageops::{self, FilterType}, DynamicImage, GenericImageView, Rgb, RgbImage};
use tracing::debug;

use crate::ratio::AspectRatio;
use crate::errors::{OdinPadError, Result};

/// the short side length we rescale padded images to
pub const DEFAULT_SHORT_SIDE: u32 = 2048;

/// background colors we support for padding
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PadColor {
    White,
    Black,
}

impl PadColor {
    pub fn rgb (&self)->Rgb<u8> {
        match self {
            PadColor::White => Rgb([255, 255, 255]),
            PadColor::Black => Rgb([0, 0, 0]),
        }
    }
}

impl FromStr for PadColor {
    type Err = OdinPadError;

    fn from_str (s: &str)->Result<Self> {
        match s {
            "white" => Ok(PadColor::White),
            "black" => Ok(PadColor::Black),
            _ => Err( OdinPadError::UnknownColor( s.to_string()))
        }
    }
}

pub fn check_padding (padding: f64)->Result<()> {
    if (0.0..1.0).contains( &padding) {
        Ok(())
    } else {
        Err( OdinPadError::IllegalArgument( format!("padding has to be within [0,1): {padding}")))
    }
}

/// compute the smallest canvas size that contains an image of the given size and has the requested aspect ratio,
/// then optionally grow it by 1/(1-padding).
/// Both steps truncate toward zero, hence the resulting ratio can slightly deviate from the requested one
pub fn padded_size (size: (u32,u32), ratio: &AspectRatio, padding: f64)->Result<(u32,u32)> {
    check_padding( padding)?;

    let (w, h) = (size.0 as f64, size.1 as f64);
    let mut width = (h / ratio.height() * ratio.width()).max(w).trunc();
    let mut height = (w / ratio.width() * ratio.height()).max(h).trunc();

    if padding > 0.0 {
        width = (width / (1.0 - padding)).trunc();
        height = (height / (1.0 - padding)).trunc();
    }

    check_canvas_size( width, height)
}

/// make sure we can allocate an RGB8 canvas of the given dimensions
fn check_canvas_size (width: f64, height: f64)->Result<(u32,u32)> {
    let max = u32::MAX as f64;
    if !(width.is_finite() && height.is_finite()) || width > max || height > max {
        return Err( OdinPadError::IllegalArgument( format!("canvas size out of range: {width}x{height}")))
    }

    let (width, height) = (width as u32, height as u32);
    (width as usize).checked_mul( height as usize)
        .and_then( |n| n.checked_mul(3))
        .map( |_| (width, height))
        .ok_or_else( || OdinPadError::IllegalArgument( format!("canvas too large: {width}x{height}")))
}

/// top left position of an image that is centered on a canvas (floor division)
pub fn center_offset (canvas_size: (u32,u32), img_size: (u32,u32))->(u32,u32) {
    ( canvas_size.0.saturating_sub(img_size.0) / 2, canvas_size.1.saturating_sub(img_size.1) / 2 )
}

/// create a solid canvas of given size and color and paste the (RGB converted) image centered onto it.
/// The pasted region replaces canvas pixels, there is no alpha blending
pub fn compose_centered (img: &DynamicImage, canvas_size: (u32,u32), color: PadColor)->RgbImage {
    let (cw, ch) = canvas_size;
    let mut canvas = RgbImage::from_pixel( cw, ch, color.rgb());

    let (x, y) = center_offset( canvas_size, img.dimensions());
    debug!("pasting {}x{} image at {},{} onto {}x{} canvas", img.width(), img.height(), x, y, cw, ch);
    imageops::replace( &mut canvas, &img.to_rgb8(), x as i64, y as i64);

    canvas
}

/// target dimensions for uniformly scaling an image so that its shorter side becomes `short_side`.
/// The longer side is truncated
pub fn short_side_dimensions (size: (u32,u32), short_side: u32)->Result<(u32,u32)> {
    let (w, h) = size;
    if short_side == 0 || w == 0 || h == 0 {
        return Err( OdinPadError::IllegalArgument( format!("cannot scale {w}x{h} to short side {short_side}")))
    }

    if w <= h {
        let scale = short_side as f64 / w as f64;
        Ok( (short_side, (h as f64 * scale) as u32) )
    } else {
        let scale = short_side as f64 / h as f64;
        Ok( ((w as f64 * scale) as u32, short_side) )
    }
}

/// uniformly rescale so that the shorter image side equals `short_side`
pub fn rescale_short_side (img: &RgbImage, short_side: u32)->Result<RgbImage> {
    let (w, h) = short_side_dimensions( img.dimensions(), short_side)?;
    debug!("rescaling {}x{} to {}x{}", img.width(), img.height(), w, h);
    Ok( imageops::resize( img, w, h, FilterType::Lanczos3) )
}
