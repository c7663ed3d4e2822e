// SPDX-License-Identifier: MPL-2.0
//! Tracking of the externally visible selected date.
//!
//! Selection lives apart from navigation on purpose: browsing months,
//! years or zoom levels never clears or moves the picked date, and
//! picking a date never moves the displayed range. The two only meet in
//! the widget facade, which tags rendered cells via [`Selection::is_selected`].

use crate::date::CalendarDate;

/// The user's picked date, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<CalendarDate>,
}

impl Selection {
    #[must_use]
    pub fn new(initial: Option<CalendarDate>) -> Self {
        Self { selected: initial }
    }

    #[must_use]
    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Whether `date` is the selected day. Uses same-day comparison, so
    /// any representation of the same calendar day matches.
    #[must_use]
    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected.is_some_and(|selected| selected.same_day(date))
    }

    /// Records `date` as the selection, replacing any previous one.
    pub fn select(&mut self, date: CalendarDate) {
        self.selected = Some(date);
    }
}
