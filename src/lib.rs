// SPDX-License-Identifier: MPL-2.0
//! `calnav` is a renderer-agnostic date-navigation core for calendar widgets.
//!
//! It models the reference date, the month/week view modes and a cyclic
//! zoom-level state machine, generates the day and unit ranges a renderer
//! lays out, derives header labels, and tracks the selected date
//! independently of navigation. Rendering, input handling and theming stay
//! with the host.
//!
//! # Example
//!
//! ```
//! use calnav::calendar::{Calendar, Intent};
//! use calnav::config::Config;
//! use calnav::date::CalendarDate;
//!
//! let mut calendar = Calendar::new(&Config {
//!     initial_date: Some(CalendarDate::new(2024, 3, 15)),
//!     ..Config::default()
//! });
//!
//! calendar.apply(Intent::Next);
//! assert_eq!(calendar.state().reference, CalendarDate::new(2024, 4, 15));
//! ```

#![doc(html_root_url = "https://docs.rs/calnav/0.2.0")]

pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod header;
pub mod navigation;
pub mod picker;
pub mod selection;
