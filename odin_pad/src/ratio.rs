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

use std::{fmt, str::FromStr};
use crate::errors::{OdinPadError, Result};

/// target width:height proportion of a padded canvas. Both components are positive and finite
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    pub fn new (width: f64, height: f64)->Result<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            Err( OdinPadError::MalformedRatio( format!("ratio components have to be positive: {width}:{height}")))
        } else {
            Ok( AspectRatio{ width, height } )
        }
    }

    #[inline] pub fn width (&self)->f64 { self.width }
    #[inline] pub fn height (&self)->f64 { self.height }

    /// the "<w>x<h>" tag we use in derived filenames, e.g. "16.0x9.0"
    pub fn filename_tag (&self)->String {
        format!("{:?}x{:?}", self.width, self.height)
    }
}

/// parse "<number>:<number>" specs such as "16:9" or "2.35:1"
impl FromStr for AspectRatio {
    type Err = OdinPadError;

    fn from_str (s: &str)->Result<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(w), Some(h), None) => {
                let width = parse_component( s, w)?;
                let height = parse_component( s, h)?;
                AspectRatio::new( width, height)
            }
            _ => Err( OdinPadError::MalformedRatio( format!("expected \"width:height\", got \"{s}\"")))
        }
    }
}

fn parse_component (spec: &str, c: &str)->Result<f64> {
    c.trim().parse::<f64>().map_err( |_| OdinPadError::MalformedRatio( format!("not a number '{c}' in \"{spec}\"")))
}

impl fmt::Display for AspectRatio {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}
