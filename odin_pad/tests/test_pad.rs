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

use std::{fs, path::{Path,PathBuf}};
use anyhow::Result;
use chrono::NaiveDate;
use image::{DynamicImage, Rgb, RgbImage};
use odin_pad::*;

// run with "cargo test test_xx -- --nocapture"

const RED: Rgb<u8> = Rgb([200, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn test_dir (name: &str)->PathBuf {
    let dir = std::env::temp_dir().join( format!("odin_pad_{}_{}", name, std::process::id()));
    fs::create_dir_all( &dir).unwrap();
    dir
}

fn write_test_image (dir: &Path, filename: &str, w: u32, h: u32)->PathBuf {
    let path = dir.join( filename);
    RgbImage::from_pixel( w, h, RED).save( &path).unwrap();
    path
}

fn ratio (spec: &str)->AspectRatio { spec.parse().unwrap() }

#[test]
fn test_output_path() {
    let dt = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(9, 5, 7).unwrap().and_utc();

    let path = output_path( "dir/photo.jpg", &ratio("16:9"), &dt);
    assert_eq!( path, PathBuf::from("dir/photo-16.0x9.0-20250304090507.jpg"));

    let path = output_path( "/tmp/scan.v2.png", &ratio("2.35:1"), &dt);
    assert_eq!( path, PathBuf::from("/tmp/scan.v2-2.35x1.0-20250304090507.png"));
}

#[test]
fn test_pad_square() -> Result<()> {
    let dir = test_dir("square");
    let input = write_test_image( &dir, "landscape.png", 800, 600);

    let out_path = pad_image_file( &input, &PadRequest::new( ratio("1:1"), PadColor::White), &PadConfig::default())?;
    println!("output: {}", out_path.display());

    assert_eq!( out_path.parent(), Some(dir.as_path()));
    let fname = out_path.file_name().unwrap().to_str().unwrap();
    assert!( fname.starts_with("landscape-1.0x1.0-") && fname.ends_with(".png"), "{fname}");
    assert_eq!( fname.len(), "landscape-1.0x1.0-".len() + 14 + ".png".len());

    let out_img = image::open( &out_path)?.to_rgb8();
    assert_eq!( out_img.dimensions(), (800,800));

    // image is centered at (0,100)
    assert_eq!( *out_img.get_pixel( 400, 99), WHITE);
    assert_eq!( *out_img.get_pixel( 400, 100), RED);
    assert_eq!( *out_img.get_pixel( 0, 699), RED);
    assert_eq!( *out_img.get_pixel( 799, 700), WHITE);

    fs::remove_dir_all( &dir).ok();
    Ok(())
}

#[test]
fn test_pad_with_padding() -> Result<()> {
    let img = DynamicImage::ImageRgb8( RgbImage::from_pixel( 1000, 500, RED));
    let out_img = pad_image( &img, &ratio("16:9"), 0.1, PadColor::Black)?;
    assert_eq!( out_img.dimensions(), (1111,624));

    // offset ((1111-1000)/2, (624-500)/2) = (55,62)
    assert_eq!( *out_img.get_pixel( 54, 62), Rgb([0,0,0]));
    assert_eq!( *out_img.get_pixel( 55, 62), RED);
    assert_eq!( *out_img.get_pixel( 55, 61), Rgb([0,0,0]));
    assert_eq!( *out_img.get_pixel( 1054, 561), RED);
    assert_eq!( *out_img.get_pixel( 1055, 561), Rgb([0,0,0]));

    Ok(())
}

#[test]
fn test_rescale() -> Result<()> {
    let img = DynamicImage::ImageRgb8( RgbImage::from_pixel( 300, 200, RED));
    let config = PadConfig { short_side: 256, ..PadConfig::default() };

    let mut req = PadRequest::new( ratio("4:3"), PadColor::White);
    req.rescale = true;

    // canvas is 300x225, short side 225 -> 256
    let out_img = process_image( &img, &req, &config)?;
    assert_eq!( out_img.height(), 256);
    assert_eq!( out_img.width(), (300.0 * 256.0 / 225.0) as u32);

    Ok(())
}

#[test]
fn test_caption() -> Result<()> {
    let img = DynamicImage::ImageRgb8( RgbImage::from_pixel( 600, 600, WHITE));
    let mut req = PadRequest::new( ratio("1:1"), PadColor::White);

    let plain = process_image( &img, &req, &PadConfig::default())?;
    assert!( plain.pixels().all( |p| *p == WHITE));

    req.caption = "ODIN".to_string();
    let captioned = process_image( &img, &req, &PadConfig::default())?;
    let n_gray = captioned.pixels().filter( |p| **p != WHITE).count();
    assert!( n_gray > 0);

    // caption is drawn in the bottom part of the image only
    for (x,y,p) in captioned.enumerate_pixels() {
        if *p != WHITE { assert!( y > 400, "unexpected caption pixel at {x},{y}"); }
    }

    Ok(())
}

#[test]
fn test_caption_missing_font() {
    let img = DynamicImage::ImageRgb8( RgbImage::from_pixel( 10, 10, WHITE));
    let mut req = PadRequest::new( ratio("1:1"), PadColor::White);
    req.caption = "ODIN".to_string();
    req.font = Some( PathBuf::from("/no/such/font.ttf"));

    let res = process_image( &img, &req, &PadConfig::default());
    assert!( matches!( res, Err(OdinPadError::ResourceUnavailable(_))));
}

#[test]
fn test_errors() {
    assert!( matches!( "blue".parse::<PadColor>(), Err(OdinPadError::UnknownColor(_))));
    assert!( matches!( "16-9".parse::<AspectRatio>(), Err(OdinPadError::MalformedRatio(_))));

    let req = PadRequest::new( ratio("1:1"), PadColor::White);
    let res = pad_image_file( "/no/such/dir/photo.jpg", &req, &PadConfig::default());
    assert!( matches!( res, Err(OdinPadError::ImageDecodeError(..))));
}

#[test]
fn test_save_errors() {
    let dir = test_dir("save");
    let img = RgbImage::from_pixel( 4, 4, RED);

    let res = save_image( &img, &dir.join("no_such_subdir").join("out.png"));
    assert!( matches!( res, Err(OdinPadError::ImageEncodeError(..))), "{res:?}");

    let res = save_image( &img, &dir.join("out.no_such_format"));
    assert!( matches!( res, Err(OdinPadError::ImageEncodeError(..))), "{res:?}");

    fs::remove_dir_all( &dir).ok();
}

#[test]
fn test_pad_out_of_range() {
    let img = DynamicImage::ImageRgb8( RgbImage::from_pixel( 1000, 1000, RED));
    let res = pad_image( &img, &ratio("1:1"), 0.9999999999, PadColor::White);
    assert!( matches!( res, Err(OdinPadError::IllegalArgument(_))));
}

#[test]
fn test_config() -> Result<()> {
    let input = fs::read_to_string("configs/pad_image.ron")?;
    let config: PadConfig = ron::from_str( &input)?;
    println!("{config:#?}");
    assert_eq!( config, PadConfig::default());

    let config: PadConfig = ron::from_str("PadConfig( short_side: 1024)")?;
    assert_eq!( config.short_side, 1024);
    assert_eq!( config.caption, CaptionStyle::default());

    let input = r#"
    #![enable(implicit_some)]
    PadConfig(
        caption: CaptionStyle( font: "MyFont.ttf", color: (0,0,0))
    )
    "#;
    let config: PadConfig = ron::from_str( input)?;
    assert_eq!( config.short_side, DEFAULT_SHORT_SIDE);
    assert_eq!( config.caption.font.as_deref(), Some("MyFont.ttf"));
    assert_eq!( config.caption.bottom_offset, 100);

    Ok(())
}

#[test]
fn test_missing_config_uses_defaults() -> Result<()> {
    let config = load_pad_config("no_such_pad_config.ron")?;
    assert_eq!( config, PadConfig::default());
    Ok(())
}
