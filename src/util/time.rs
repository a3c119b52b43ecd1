// Copyright (c) 2024 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Time-related utility functions.

use chrono::{
    format::{parse, Parsed, StrftimeItems},
    NaiveDate,
};

/// Allowed date formats (as returned by the catalog).
const PARTIAL_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y-%m", "%Y%m%d", "%Y%m", "%Y"];

/// Parse a date from a [`str`] slice by trying various common formats.
///
/// Missing month or day components default to the first month or day.
pub fn parse_partial_date_from_str(value: impl AsRef<str>) -> Option<NaiveDate> {
    for fmt in PARTIAL_DATE_FORMATS {
        let mut parsed = Parsed::new();
        if parse(&mut parsed, value.as_ref(), StrftimeItems::new(fmt)).is_err() {
            continue;
        }

        if let Some(date) = parsed
            .year()
            .map(|year| {
                parsed
                    .month
                    .map_or((year, 1, 1), |month| (year, month, parsed.day.unwrap_or(1)))
            })
            .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
        {
            return Some(date);
        }
    }

    None
}

/// Format the year of a date as four-digit string.
pub fn format_year(date: &NaiveDate) -> String {
    date.format("%Y").to_string()
}
