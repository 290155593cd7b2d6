// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Mon, 22 Oct 2018 22:22:22 GMT`
///
/// The date is both sent as a header and fed into the signature, so this
/// format must never drift. Sub-second precision is dropped.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_time() -> DateTime {
        Utc.with_ymd_and_hms(2018, 10, 22, 22, 22, 22)
            .unwrap()
            .with_nanosecond(222_222_000)
            .unwrap()
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(test_time()), "Mon, 22 Oct 2018 22:22:22 GMT");
    }

    #[test]
    fn test_format_http_date_pads_day() {
        let t = Utc.with_ymd_and_hms(2022, 3, 1, 7, 2, 4).unwrap();
        assert_eq!(format_http_date(t), "Tue, 01 Mar 2022 07:02:04 GMT");
    }

    #[test]
    fn test_format_http_date_is_per_instant() {
        let later = test_time() + chrono::TimeDelta::seconds(1);
        assert_eq!(format_http_date(later), "Mon, 22 Oct 2018 22:22:23 GMT");
    }
}
