// SPDX-License-Identifier: MPL-2.0
use calnav::calendar::{Calendar, CalendarSnapshot, Event, Intent};
use calnav::config::{self, Config};
use calnav::date::{CalendarDate, WeekStart};
use calnav::grid::{DayCell, DisplayUnits, UnitCell};
use calnav::navigation::{ViewMode, ZoomLevel};
use calnav::picker;
use tempfile::tempdir;

fn march_calendar() -> Calendar {
    Calendar::new(&Config {
        initial_date: Some(CalendarDate::new(2024, 3, 15)),
        ..Config::default()
    })
}

fn day_cells_of(snapshot: CalendarSnapshot) -> Vec<DayCell> {
    match snapshot.units {
        DisplayUnits::Days(cells) => cells,
        DisplayUnits::Units(_) => panic!("expected day cells"),
    }
}

fn unit_cells_of(snapshot: CalendarSnapshot) -> Vec<UnitCell> {
    match snapshot.units {
        DisplayUnits::Units(cells) => cells,
        DisplayUnits::Days(_) => panic!("expected unit cells"),
    }
}

#[test]
fn test_month_grid_for_march_2024() {
    let calendar = march_calendar();
    let snapshot = calendar.snapshot_at(CalendarDate::new(2024, 3, 15));

    assert_eq!(snapshot.header, "2024-03");
    assert_eq!(snapshot.weekday_labels[0], "Mon");

    let cells = day_cells_of(snapshot);
    assert_eq!(cells.len(), 35);
    assert_eq!(cells[0].date, CalendarDate::new(2024, 2, 26));
    assert_eq!(cells[34].date, CalendarDate::new(2024, 3, 31));

    // The span is contiguous and the padding days are tagged.
    for pair in cells.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.next_day());
    }
    assert!(!cells[0].in_reference_month);
    assert!(cells.iter().filter(|c| c.in_reference_month).count() == 31);
}

#[test]
fn test_zoom_cycle_walks_all_headers() {
    let mut calendar = march_calendar();
    let today = CalendarDate::new(2024, 3, 15);

    let mut headers = vec![calendar.snapshot_at(today).header];
    for _ in 0..4 {
        calendar.apply(Intent::AdvanceZoom);
        headers.push(calendar.snapshot_at(today).header);
    }

    assert_eq!(
        headers,
        vec!["2024-03", "2024", "2020-2029", "1800-2099", "2024-03"]
    );
    // Zooming never moves the reference.
    assert_eq!(calendar.state().reference, CalendarDate::new(2024, 3, 15));
}

#[test]
fn test_decade_navigation() {
    let mut calendar = march_calendar();
    let today = CalendarDate::new(2024, 3, 15);

    // 1. Zoom out to the year grid.
    calendar.apply(Intent::AdvanceZoom);
    calendar.apply(Intent::AdvanceZoom);
    assert_eq!(calendar.state().zoom, ZoomLevel::Year);
    assert_eq!(calendar.snapshot_at(today).header, "2020-2029");

    // 2. Step one decade forward.
    calendar.apply(Intent::Next);
    assert_eq!(calendar.state().reference, CalendarDate::new(2034, 3, 15));
    assert_eq!(calendar.snapshot_at(today).header, "2030-2039");

    // 3. Pick a year, landing on its month grid.
    calendar.apply(Intent::SelectYear(2033));
    assert_eq!(calendar.state().zoom, ZoomLevel::Month);
    assert_eq!(calendar.snapshot_at(today).header, "2033");
}

#[test]
fn test_multi_year_navigation() {
    let mut calendar = Calendar::new(&Config {
        initial_date: Some(CalendarDate::new(1850, 6, 1)),
        ..Config::default()
    });
    let today = CalendarDate::new(2024, 3, 15);

    calendar.apply(Intent::AdvanceZoom);
    calendar.apply(Intent::AdvanceZoom);
    calendar.apply(Intent::AdvanceZoom);
    assert_eq!(calendar.state().zoom, ZoomLevel::MultiYear);

    let snapshot = calendar.snapshot_at(today);
    assert_eq!(snapshot.header, "1800-2099");
    let cells = unit_cells_of(snapshot);
    assert_eq!(cells[0].value, 1800);
    assert_eq!(cells[1].value, 1825);
    assert!(cells.iter().any(|c| c.value == 1975));

    calendar.apply(Intent::SelectMultiYear(1975));
    assert_eq!(calendar.state().zoom, ZoomLevel::Year);
    assert_eq!(calendar.state().reference.year(), 1975);
    assert_eq!(calendar.snapshot_at(today).header, "1970-1979");
}

#[test]
fn test_week_view_selection() {
    let mut calendar = Calendar::new(&Config {
        view_mode: ViewMode::Week,
        initial_date: Some(CalendarDate::new(2024, 3, 15)),
        ..Config::default()
    });
    let today = CalendarDate::new(2024, 3, 15);

    let cells = day_cells_of(calendar.snapshot_at(today));
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0].date, CalendarDate::new(2024, 3, 11));

    // Picking a visible day reports exactly one selection change.
    let picked = CalendarDate::new(2024, 3, 13);
    let event = calendar.apply(Intent::SelectDate(picked));
    assert_eq!(event, Some(Event::SelectionChanged(picked)));
    assert_eq!(calendar.state().reference, CalendarDate::new(2024, 3, 15));

    // Stepping a day forward keeps the selection and still tags it.
    calendar.apply(Intent::Next);
    assert_eq!(calendar.state().reference, CalendarDate::new(2024, 3, 16));
    let cells = day_cells_of(calendar.snapshot_at(today));
    let selected: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].date, picked);
}

#[test]
fn test_today_from_a_distant_past() {
    let mut calendar = Calendar::new(&Config {
        initial_date: Some(CalendarDate::new(1850, 6, 1)),
        ..Config::default()
    });
    calendar.apply(Intent::AdvanceZoom);
    calendar.apply(Intent::AdvanceZoom);

    calendar.apply(Intent::Today);
    assert_eq!(calendar.state().zoom, ZoomLevel::Day);
    assert!(calendar.state().reference.same_day(CalendarDate::today()));
}

#[test]
fn test_month_pick_descends_to_the_day_grid() {
    let mut calendar = march_calendar();
    let today = CalendarDate::new(2024, 3, 15);

    calendar.apply(Intent::AdvanceZoom);
    assert_eq!(calendar.snapshot_at(today).header, "2024");

    calendar.apply(Intent::SelectMonth(1));
    assert_eq!(calendar.state().zoom, ZoomLevel::Day);
    assert_eq!(calendar.state().reference, CalendarDate::new(2024, 1, 15));
    assert_eq!(calendar.snapshot_at(today).header, "2024-01");
}

#[test]
fn test_config_round_trip_drives_the_calendar() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Persist a non-default setup.
    let saved = Config {
        week_start: WeekStart::Saturday,
        view_mode: ViewMode::Week,
        initial_date: Some(CalendarDate::new(2024, 3, 15)),
        initial_selection: Some(CalendarDate::new(2024, 3, 13)),
        primary_color: Some("#10b981".to_string()),
        secondary_color: None,
    };
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");

    // 2. Reload it and build a calendar from it.
    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded, saved);

    let calendar = Calendar::new(&loaded);
    let snapshot = calendar.snapshot_at(CalendarDate::new(2024, 3, 15));
    assert_eq!(snapshot.weekday_labels[0], "Sat");
    assert_eq!(snapshot.selected, Some(CalendarDate::new(2024, 3, 13)));
    assert_eq!(snapshot.style.primary.as_deref(), Some("#10b981"));

    // Saturday week containing Friday 2024-03-15 starts on the 9th.
    let cells = day_cells_of(snapshot);
    assert_eq!(cells[0].date, CalendarDate::new(2024, 3, 9));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_jump_from_picker_choices() {
    let mut calendar = march_calendar();
    let today = CalendarDate::new(2024, 3, 15);

    let years = picker::year_window(calendar.state().reference);
    let months = picker::month_items();
    assert_eq!(years.len(), 21);

    calendar.apply(Intent::JumpTo {
        year: years[0],
        month: months[5],
    });
    assert_eq!(calendar.state().zoom, ZoomLevel::Day);
    assert_eq!(calendar.snapshot_at(today).header, "2014-06");
}
