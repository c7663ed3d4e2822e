// SPDX-License-Identifier: MPL-2.0
//! Zoom-level state machine driving calendar navigation.
//!
//! A [`Navigator`] holds the reference date, the view mode and the
//! current [`ZoomLevel`]. All `prev`/`next` movement funnels through
//! one step table ([`Step::for_level`]), so the policy "which action
//! moves the reference by how much" lives in a single place instead of
//! being scattered over per-view branches. Zoom changes are equally
//! centralized: the header cycles levels via [`ZoomLevel::advanced`]
//! and unit selections descend one level with a fixed target each.
//!
//! Every transition is total. Out-of-range inputs are clamped by the
//! date layer and selection inputs outside the displayed range still
//! produce a well-defined state.

use crate::date::{CalendarDate, WeekStart};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// View mode
// ============================================================================

/// Shape of the day grid: a full month or a single week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

impl ViewMode {
    /// The other view mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Month => ViewMode::Week,
            ViewMode::Week => ViewMode::Month,
        }
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            other => Err(Error::Config(format!(
                "unknown view mode '{}' (expected month or week)",
                other
            ))),
        }
    }
}

// ============================================================================
// Zoom level
// ============================================================================

/// Granularity currently displayed by the widget.
///
/// `Day` shows a day grid, the other levels show synthetic unit grids
/// (months of a year, years of a decade, year spans of three centuries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomLevel {
    #[default]
    Day,
    Month,
    Year,
    MultiYear,
}

impl ZoomLevel {
    /// Next level in the cycle Day, Month, Year, MultiYear and back to
    /// Day. Four advances always return to the starting level.
    #[must_use]
    pub const fn advanced(self) -> Self {
        match self {
            ZoomLevel::Day => ZoomLevel::Month,
            ZoomLevel::Month => ZoomLevel::Year,
            ZoomLevel::Year => ZoomLevel::MultiYear,
            ZoomLevel::MultiYear => ZoomLevel::Day,
        }
    }
}

// ============================================================================
// Step table
// ============================================================================

/// Reference-date displacement of a single `prev` or `next` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Days(i64),
    Months(i32),
    Years(i32),
}

impl Step {
    /// Step applied at the given zoom level. The view mode only matters
    /// at day zoom, where the visible range is either a week or a month.
    #[must_use]
    pub const fn for_level(zoom: ZoomLevel, view_mode: ViewMode) -> Self {
        match (zoom, view_mode) {
            (ZoomLevel::Day, ViewMode::Week) => Step::Days(1),
            (ZoomLevel::Day, ViewMode::Month) => Step::Months(1),
            (ZoomLevel::Month, _) => Step::Years(1),
            (ZoomLevel::Year, _) => Step::Years(10),
            (ZoomLevel::MultiYear, _) => Step::Years(300),
        }
    }

    /// Applies the step in the forward direction.
    #[must_use]
    pub fn forward(self, date: CalendarDate) -> CalendarDate {
        match self {
            Step::Days(n) => date.add_days(n),
            Step::Months(n) => date.add_months(n),
            Step::Years(n) => date.add_years(n),
        }
    }

    /// Applies the step in the backward direction.
    #[must_use]
    pub fn backward(self, date: CalendarDate) -> CalendarDate {
        match self {
            Step::Days(n) => date.add_days(-n),
            Step::Months(n) => date.add_months(-n),
            Step::Years(n) => date.add_years(-n),
        }
    }
}

// ============================================================================
// Navigation state
// ============================================================================

/// Complete navigation position. Cheap to copy and compare, which keeps
/// renderer-side change detection trivial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Anchor date every displayed range derives from.
    pub reference: CalendarDate,
    pub view_mode: ViewMode,
    pub zoom: ZoomLevel,
}

/// Owns the navigation state and applies transitions to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    state: NavigationState,
    week_start: WeekStart,
}

impl Navigator {
    /// Starts at day zoom on the given reference date.
    #[must_use]
    pub fn new(reference: CalendarDate, view_mode: ViewMode, week_start: WeekStart) -> Self {
        Self {
            state: NavigationState {
                reference,
                view_mode,
                zoom: ZoomLevel::default(),
            },
            week_start,
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn reference(&self) -> CalendarDate {
        self.state.reference
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.state.zoom
    }

    #[must_use]
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Moves the reference one step back at the current zoom level.
    pub fn prev(&mut self) {
        let step = Step::for_level(self.state.zoom, self.state.view_mode);
        self.state.reference = step.backward(self.state.reference);
    }

    /// Moves the reference one step forward at the current zoom level.
    pub fn next(&mut self) {
        let step = Step::for_level(self.state.zoom, self.state.view_mode);
        self.state.reference = step.forward(self.state.reference);
    }

    /// Returns to the current date and to day zoom. The view mode is
    /// left untouched.
    pub fn today(&mut self) {
        self.state.reference = CalendarDate::today();
        self.state.zoom = ZoomLevel::Day;
    }

    /// Cycles to the next zoom level without moving the reference.
    pub fn advance_zoom(&mut self) {
        self.state.zoom = self.state.zoom.advanced();
    }

    /// Picks a month (1..=12) at month zoom: keeps the year, descends to
    /// the day grid. Out-of-range months are clamped.
    pub fn select_month(&mut self, month: u32) {
        self.state.reference = self.state.reference.with_month(month);
        self.state.zoom = ZoomLevel::Day;
    }

    /// Picks a year at year zoom: descends to the month grid of that
    /// year.
    pub fn select_year(&mut self, year: i32) {
        self.state.reference = self.state.reference.with_year(year);
        self.state.zoom = ZoomLevel::Month;
    }

    /// Picks a year span at multi-year zoom: descends to the year grid
    /// around the given year.
    pub fn select_multi_year(&mut self, year: i32) {
        self.state.reference = self.state.reference.with_year(year);
        self.state.zoom = ZoomLevel::Year;
    }

    /// Switches between month and week day grids. Reference and zoom are
    /// unaffected.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.state.view_mode = view_mode;
    }

    /// Jumps straight to a year and month, landing on the day grid. The
    /// day component of the reference is kept (clamped to the target
    /// month's length).
    pub fn jump_to(&mut self, year: i32, month: u32) {
        self.state.reference = CalendarDate::new(year, month, self.state.reference.day());
        self.state.zoom = ZoomLevel::Day;
    }
}
