// SPDX-License-Identifier: MPL-2.0
//! Day-granular calendar dates and the arithmetic the navigation core
//! is built on.
//!
//! [`CalendarDate`] wraps `chrono::NaiveDate` behind a total interface:
//! every operation is defined for every input. Out-of-range components
//! are clamped (month 13 becomes December, day 31 in April becomes
//! April 30) and arithmetic saturates at the supported calendar bounds
//! instead of failing. Callers therefore never handle date errors
//! outside of text parsing.

use crate::error::{Error, Result};
use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Week start convention
// ============================================================================

/// First day of the week used when snapping dates to week boundaries.
///
/// Monday is the default. Sunday and Saturday cover the common regional
/// conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
    Saturday,
}

impl WeekStart {
    fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Saturday => Weekday::Sat,
        }
    }

    /// Short weekday labels in display order, starting at this convention's
    /// first day.
    #[must_use]
    pub fn weekday_labels(self) -> [&'static str; 7] {
        const LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let start = self.first_weekday().num_days_from_monday() as usize;
        std::array::from_fn(|i| LABELS[(start + i) % 7])
    }
}

impl FromStr for WeekStart {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            "saturday" => Ok(WeekStart::Saturday),
            other => Err(Error::Config(format!(
                "unknown week start '{}' (expected monday, sunday or saturday)",
                other
            ))),
        }
    }
}

// ============================================================================
// Calendar date
// ============================================================================

/// An immutable day-granular point in time.
///
/// Ordering, equality and hashing follow chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from components, clamping each into its valid range.
    ///
    /// Month is clamped to 1..=12, day to the length of the resulting
    /// month. Years outside the supported calendar range saturate at the
    /// nearest bound.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let month = month.clamp(1, 12);
        let day = day.clamp(1, days_in_month(year, month));
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self(date),
            None if year > 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// Current date in the local timezone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a `YYYY-MM-DD` string.
    pub fn parse_ymd(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| {
                Error::Date(format!("invalid date '{}' (expected YYYY-MM-DD)", input))
            })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Shifts by whole days, saturating at the calendar bounds.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days as u64))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match shifted {
            Some(date) => Self(date),
            None if days >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// Shifts by whole months, clamping the day to the target month's
    /// length (January 31 plus one month is February 28 or 29).
    #[must_use]
    pub fn add_months(self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months as u32))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        match shifted {
            Some(date) => Self(date),
            None if months >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// Shifts by whole years, clamping February 29 to February 28 in
    /// non-leap target years.
    #[must_use]
    pub fn add_years(self, years: i32) -> Self {
        self.add_months(years.saturating_mul(12))
    }

    /// Replaces the month component, clamping month and day.
    #[must_use]
    pub fn with_month(self, month: u32) -> Self {
        Self::new(self.year(), month, self.day())
    }

    /// Replaces the year component, clamping the day where needed.
    #[must_use]
    pub fn with_year(self, year: i32) -> Self {
        Self::new(year, self.month(), self.day())
    }

    // ------------------------------------------------------------------
    // Boundary snapping
    // ------------------------------------------------------------------

    /// First day of the week containing this date, under the given
    /// convention.
    #[must_use]
    pub fn start_of_week(self, week_start: WeekStart) -> Self {
        let offset = (7 + self.0.weekday().num_days_from_monday()
            - week_start.first_weekday().num_days_from_monday())
            % 7;
        self.add_days(-i64::from(offset))
    }

    /// Last day of the week containing this date, under the given
    /// convention.
    #[must_use]
    pub fn end_of_week(self, week_start: WeekStart) -> Self {
        self.start_of_week(week_start).add_days(6)
    }

    /// First day of this date's month.
    #[must_use]
    pub fn start_of_month(self) -> Self {
        Self::new(self.year(), self.month(), 1)
    }

    /// Last day of this date's month.
    #[must_use]
    pub fn end_of_month(self) -> Self {
        Self::new(self.year(), self.month(), days_in_month(self.year(), self.month()))
    }

    /// January 1 of this date's year.
    #[must_use]
    pub fn start_of_year(self) -> Self {
        Self::new(self.year(), 1, 1)
    }

    /// December 31 of this date's year.
    #[must_use]
    pub fn end_of_year(self) -> Self {
        Self::new(self.year(), 12, 31)
    }

    // ------------------------------------------------------------------
    // Comparisons
    // ------------------------------------------------------------------

    #[must_use]
    pub fn same_day(self, other: Self) -> bool {
        self.0 == other.0
    }

    #[must_use]
    pub fn same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    #[must_use]
    pub fn same_year(self, other: Self) -> bool {
        self.year() == other.year()
    }

    #[must_use]
    pub fn is_before(self, other: Self) -> bool {
        self.0 < other.0
    }

    #[must_use]
    pub fn same_or_after(self, other: Self) -> bool {
        self.0 >= other.0
    }

    /// The following day, saturating at the calendar upper bound.
    #[must_use]
    pub fn next_day(self) -> Self {
        self.add_days(1)
    }

    /// `YYYY-MM` rendering used by header labels.
    #[must_use]
    pub fn format_ym(self) -> String {
        self.0.format("%Y-%m").to_string()
    }
}

impl fmt::Display for CalendarDate {
    /// Renders as ISO `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse_ymd(input)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
