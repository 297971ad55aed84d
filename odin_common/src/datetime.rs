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

use std::fmt::Display;
use chrono::{DateTime, Local, TimeZone};

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn local_now()->DateTime<Local> {
    Local::now()
}

/// second resolution timestamp without separators (e.g. "20250314093015"), suitable for filenames
pub fn compact_datetime_string<Tz> (dt: &DateTime<Tz>) -> String where Tz: TimeZone, Tz::Offset: Display {
    format!("{}", dt.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_compact_datetime_string() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(9, 5, 7).unwrap().and_utc();
        assert_eq!( compact_datetime_string(&dt), "20250304090507");
    }
}
