// SPDX-License-Identifier: MPL-2.0
//! Item lists for a host's jump picker (wheel or dropdown widgets).
//!
//! The host renders these plain integer lists however it likes and
//! feeds the confirmed year and month back through the widget facade's
//! jump intent.

use crate::date::CalendarDate;

/// Years offered on each side of the centre year.
pub const YEAR_WINDOW_RADIUS: i32 = 10;

/// Year choices centred on the given date's year: twenty-one
/// consecutive years.
#[must_use]
pub fn year_window(center: CalendarDate) -> Vec<i32> {
    let year = center.year();
    ((year - YEAR_WINDOW_RADIUS)..=(year + YEAR_WINDOW_RADIUS)).collect()
}

/// Month choices, 1 through 12.
#[must_use]
pub fn month_items() -> Vec<u32> {
    (1..=12).collect()
}
