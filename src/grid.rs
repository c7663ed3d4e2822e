// SPDX-License-Identifier: MPL-2.0
//! Range generation: the day lists and unit lists a renderer lays out.
//!
//! The day grid at month view covers whole weeks, from the week
//! containing the first of the reference month through the week
//! containing its last day, so a row never starts or ends mid-week.
//! Week view is a single seven-day row. The coarser zoom levels show
//! synthetic unit grids: the twelve months of a year, the years of a
//! decade padded by one neighbour on each side, and a three-century
//! span in quarter-century steps.
//!
//! Everything here is a pure function of the reference date and the
//! configured week start. "Today" is passed in by the caller, which
//! keeps the grid functions deterministic and directly testable.

use crate::date::{CalendarDate, WeekStart};
use crate::header::{decade_start, multi_year_start, DECADE_YEARS, MULTI_YEAR_SPAN_YEARS};
use crate::navigation::ViewMode;

/// Years covered by one cell of the multi-year grid.
pub const MULTI_YEAR_UNIT_YEARS: i32 = 25;

// ============================================================================
// Cell types
// ============================================================================

/// One day of the day grid, tagged for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// Matches the caller-supplied current date.
    pub is_today: bool,
    /// False for the leading and trailing days padding the month grid
    /// to whole weeks.
    pub in_reference_month: bool,
    /// Matches the caller-supplied selected date.
    pub is_selected: bool,
}

/// One cell of a unit grid: a month number, a year or the first year of
/// a multi-year span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCell {
    pub value: i32,
    /// Contains the reference date.
    pub is_current: bool,
    /// False for padding cells outside the labelled range.
    pub in_range: bool,
}

/// Cells to display at the current zoom level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUnits {
    Days(Vec<DayCell>),
    Units(Vec<UnitCell>),
}

// ============================================================================
// Day spans
// ============================================================================

/// Days shown at day zoom in month view: the reference month padded to
/// whole weeks on both sides. The result is contiguous and its length a
/// multiple of seven.
#[must_use]
pub fn month_span(reference: CalendarDate, week_start: WeekStart) -> Vec<CalendarDate> {
    let first = reference.start_of_month().start_of_week(week_start);
    let last = reference.end_of_month().end_of_week(week_start);

    let mut days = Vec::with_capacity(42);
    let mut day = first;
    loop {
        days.push(day);
        if day.same_day(last) {
            break;
        }
        day = day.next_day();
    }
    days
}

/// The seven days of the week containing the reference date.
#[must_use]
pub fn week_span(reference: CalendarDate, week_start: WeekStart) -> Vec<CalendarDate> {
    let start = reference.start_of_week(week_start);
    (0..7).map(|offset| start.add_days(offset)).collect()
}

/// Day-zoom span for the given view mode.
#[must_use]
pub fn day_span(
    reference: CalendarDate,
    view_mode: ViewMode,
    week_start: WeekStart,
) -> Vec<CalendarDate> {
    match view_mode {
        ViewMode::Month => month_span(reference, week_start),
        ViewMode::Week => week_span(reference, week_start),
    }
}

/// Day-zoom span tagged for rendering against the supplied current and
/// selected dates.
#[must_use]
pub fn day_cells(
    reference: CalendarDate,
    view_mode: ViewMode,
    week_start: WeekStart,
    today: CalendarDate,
    selected: Option<CalendarDate>,
) -> Vec<DayCell> {
    day_span(reference, view_mode, week_start)
        .into_iter()
        .map(|date| DayCell {
            date,
            is_today: date.same_day(today),
            in_reference_month: date.same_month(reference),
            is_selected: selected.is_some_and(|s| s.same_day(date)),
        })
        .collect()
}

// ============================================================================
// Unit grids
// ============================================================================

/// The twelve months of the reference year.
#[must_use]
pub fn month_units(reference: CalendarDate) -> Vec<UnitCell> {
    (1..=12u32)
        .map(|month| UnitCell {
            value: month as i32,
            is_current: month == reference.month(),
            in_range: true,
        })
        .collect()
}

/// The reference decade, padded with one year on each side to fill a
/// twelve-cell grid. Padding cells are tagged out of range.
#[must_use]
pub fn year_units(reference: CalendarDate) -> Vec<UnitCell> {
    let decade = decade_start(reference.year());
    ((decade - 1)..=(decade + DECADE_YEARS))
        .map(|year| UnitCell {
            value: year,
            is_current: year == reference.year(),
            in_range: (decade..decade + DECADE_YEARS).contains(&year),
        })
        .collect()
}

/// The reference 300-year span in quarter-century steps. Each cell's
/// value is the first year of its span; the cell whose span contains
/// the reference year is tagged current.
#[must_use]
pub fn multi_year_units(reference: CalendarDate) -> Vec<UnitCell> {
    let base = multi_year_start(reference.year());
    let current =
        base + (reference.year() - base) / MULTI_YEAR_UNIT_YEARS * MULTI_YEAR_UNIT_YEARS;
    (0..MULTI_YEAR_SPAN_YEARS / MULTI_YEAR_UNIT_YEARS)
        .map(|index| {
            let value = base + index * MULTI_YEAR_UNIT_YEARS;
            UnitCell {
                value,
                is_current: value == current,
                in_range: true,
            }
        })
        .collect()
}
