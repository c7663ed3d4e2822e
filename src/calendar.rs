// SPDX-License-Identifier: MPL-2.0
//! Widget facade: one update entrypoint over navigation and selection.
//!
//! Hosts drive the calendar exclusively through [`Intent`] values and
//! read it back through [`CalendarSnapshot`], which keeps renderers free
//! of date logic. One applied intent performs exactly one transition.
//! Selection is gated here rather than in the selection controller:
//! picking a date only applies at day zoom, where day cells are on
//! screen.

use crate::config::Config;
use crate::date::CalendarDate;
use crate::grid::{self, DisplayUnits};
use crate::header::header_label;
use crate::navigation::{NavigationState, Navigator, ViewMode, ZoomLevel};
use crate::selection::Selection;

// ============================================================================
// Intents and events
// ============================================================================

/// User gestures the host forwards to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// One step back at the current zoom level.
    Prev,
    /// One step forward at the current zoom level.
    Next,
    /// Back to the current date, on the day grid.
    Today,
    /// Cycle to the next zoom level.
    AdvanceZoom,
    /// Switch the day grid between month and week layout.
    SetViewMode(ViewMode),
    /// Pick a day cell. Applies at day zoom only.
    SelectDate(CalendarDate),
    /// Pick a month cell at month zoom.
    SelectMonth(u32),
    /// Pick a year cell at year zoom.
    SelectYear(i32),
    /// Pick a span cell at multi-year zoom.
    SelectMultiYear(i32),
    /// Jump straight to a year and month, as confirmed in a picker
    /// popup.
    JumpTo { year: i32, month: u32 },
}

/// Notifications the host may want to propagate to its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SelectionChanged(CalendarDate),
}

// ============================================================================
// Snapshot
// ============================================================================

/// Opaque style tokens forwarded to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleTokens {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSnapshot {
    pub state: NavigationState,
    /// Header label for the current zoom level.
    pub header: String,
    /// Weekday labels in display order.
    pub weekday_labels: [&'static str; 7],
    /// Cells for the current zoom level.
    pub units: DisplayUnits,
    pub selected: Option<CalendarDate>,
    pub style: StyleTokens,
}

// ============================================================================
// Calendar
// ============================================================================

/// The widget core: a navigator, a selection and the pass-through
/// styling, updated one intent at a time.
#[derive(Debug, Clone)]
pub struct Calendar {
    navigator: Navigator,
    selection: Selection,
    style: StyleTokens,
}

impl Calendar {
    /// Builds a calendar from host configuration. The reference date
    /// falls back to today when the configuration names none.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let reference = config.initial_date.unwrap_or_else(CalendarDate::today);
        Self {
            navigator: Navigator::new(reference, config.view_mode, config.week_start),
            selection: Selection::new(config.initial_selection),
            style: StyleTokens {
                primary: config.primary_color.clone(),
                secondary: config.secondary_color.clone(),
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.navigator.state()
    }

    #[must_use]
    pub fn selected(&self) -> Option<CalendarDate> {
        self.selection.selected()
    }

    #[must_use]
    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selection.is_selected(date)
    }

    /// Applies one gesture and returns the event it raised, if any.
    pub fn apply(&mut self, intent: Intent) -> Option<Event> {
        match intent {
            Intent::Prev => {
                self.navigator.prev();
                None
            }
            Intent::Next => {
                self.navigator.next();
                None
            }
            Intent::Today => {
                self.navigator.today();
                None
            }
            Intent::AdvanceZoom => {
                self.navigator.advance_zoom();
                None
            }
            Intent::SetViewMode(view_mode) => {
                self.navigator.set_view_mode(view_mode);
                None
            }
            Intent::SelectDate(date) => {
                if self.navigator.zoom() == ZoomLevel::Day {
                    self.selection.select(date);
                    Some(Event::SelectionChanged(date))
                } else {
                    None
                }
            }
            Intent::SelectMonth(month) => {
                self.navigator.select_month(month);
                None
            }
            Intent::SelectYear(year) => {
                self.navigator.select_year(year);
                None
            }
            Intent::SelectMultiYear(year) => {
                self.navigator.select_multi_year(year);
                None
            }
            Intent::JumpTo { year, month } => {
                self.navigator.jump_to(year, month);
                None
            }
        }
    }

    /// Snapshot against the real current date.
    #[must_use]
    pub fn snapshot(&self) -> CalendarSnapshot {
        self.snapshot_at(CalendarDate::today())
    }

    /// Snapshot against a caller-supplied current date. Deterministic,
    /// which suits tests and hosts rendering for another timezone.
    #[must_use]
    pub fn snapshot_at(&self, today: CalendarDate) -> CalendarSnapshot {
        let state = self.navigator.state();
        let week_start = self.navigator.week_start();
        let units = match state.zoom {
            ZoomLevel::Day => DisplayUnits::Days(grid::day_cells(
                state.reference,
                state.view_mode,
                week_start,
                today,
                self.selection.selected(),
            )),
            ZoomLevel::Month => DisplayUnits::Units(grid::month_units(state.reference)),
            ZoomLevel::Year => DisplayUnits::Units(grid::year_units(state.reference)),
            ZoomLevel::MultiYear => {
                DisplayUnits::Units(grid::multi_year_units(state.reference))
            }
        };
        CalendarSnapshot {
            state,
            header: header_label(state.reference, state.zoom),
            weekday_labels: week_start.weekday_labels(),
            units,
            selected: self.selection.selected(),
            style: self.style.clone(),
        }
    }
}

impl Default for Calendar {
    /// Opens on today's month grid with Monday weeks.
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
