// SPDX-License-Identifier: MPL-2.0
//! Header labels summarizing the visible range at each zoom level.
//!
//! Labels are plain strings derived from the reference date alone:
//! `2024-03` at day zoom, `2024` at month zoom, `2020-2029` at year
//! zoom and `1800-2099` at multi-year zoom. The decade and multi-year
//! bucket functions floor correctly for negative years, so labels stay
//! consistent across the whole supported calendar.

use crate::date::CalendarDate;
use crate::navigation::ZoomLevel;

/// Years covered by the year-zoom grid's decade.
pub const DECADE_YEARS: i32 = 10;

/// Years covered by one multi-year span.
pub const MULTI_YEAR_SPAN_YEARS: i32 = 300;

/// First year of the decade containing `year` (2024 -> 2020, -5 -> -10).
#[must_use]
pub fn decade_start(year: i32) -> i32 {
    year.div_euclid(DECADE_YEARS) * DECADE_YEARS
}

/// First year of the 300-year span containing `year` (1850 -> 1800).
#[must_use]
pub fn multi_year_start(year: i32) -> i32 {
    year - year.rem_euclid(MULTI_YEAR_SPAN_YEARS)
}

/// Header label for the given reference date and zoom level.
#[must_use]
pub fn header_label(reference: CalendarDate, zoom: ZoomLevel) -> String {
    match zoom {
        ZoomLevel::Day => reference.format_ym(),
        ZoomLevel::Month => reference.year().to_string(),
        ZoomLevel::Year => {
            let start = decade_start(reference.year());
            format!("{}-{}", start, start + DECADE_YEARS - 1)
        }
        ZoomLevel::MultiYear => {
            let start = multi_year_start(reference.year());
            format!("{}-{}", start, start + MULTI_YEAR_SPAN_YEARS - 1)
        }
    }
}
