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

use odin_common::define_error;

pub type Result<T> = std::result::Result<T, OdinPadError>;

define_error!{ pub OdinPadError =
    MalformedRatio(String) : "malformed aspect ratio: {0}",
    UnknownColor(String) : "unknown color: {0} (expected \"white\" or \"black\")",
    ImageDecodeError(String, image::ImageError) : "failed to decode image {0}: {1}",
    ImageEncodeError(String, image::ImageError) : "failed to encode image {0}: {1}",
    ResourceUnavailable(String) : "resource unavailable: {0}",
    InvalidFont( #[from] ab_glyph::InvalidFont) : "Invalid font error: {0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    ConfigError(#[from] odin_build::OdinBuildError) : "config error: {0}",
    IllegalArgument(String) : "illegal argument: {0}"
}
