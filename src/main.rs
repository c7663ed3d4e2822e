use calnav::calendar::{Calendar, Event, Intent};
use calnav::config;
use calnav::date::CalendarDate;
use calnav::error::{Error, Result};
use calnav::grid::{DayCell, DisplayUnits, UnitCell, MULTI_YEAR_UNIT_YEARS};
use calnav::navigation::{ViewMode, ZoomLevel};
use calnav::picker;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
calnav demo host

USAGE:
  calnav [OPTIONS]

OPTIONS:
  --config <PATH>        Load settings from PATH instead of the default location
  --date <YYYY-MM-DD>    Open on this date instead of today
  --view <month|week>    Day-grid layout
  --week-start <DAY>     monday, sunday or saturday
  -h, --help             Print this help

COMMANDS (one per line on stdin):
  n                next             p                previous
  t                today            z                zoom out one level
  v                toggle month/week day grid
  s <YYYY-MM-DD>   select a date (day zoom only)
  m <1-12>         pick a month    y <YEAR>          pick a year
  u <YEAR>         pick a year span
  j                show jump choices
  j <YEAR> <1-12>  jump straight to a month
  q                quit
";

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let config_path: Option<PathBuf> = args
        .opt_value_from_str("--config")
        .map_err(|e| Error::Config(e.to_string()))?;
    let mut cfg = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };

    if let Some(date) = args
        .opt_value_from_str("--date")
        .map_err(|e| Error::Config(e.to_string()))?
    {
        cfg.initial_date = Some(date);
    }
    if let Some(view_mode) = args
        .opt_value_from_str("--view")
        .map_err(|e| Error::Config(e.to_string()))?
    {
        cfg.view_mode = view_mode;
    }
    if let Some(week_start) = args
        .opt_value_from_str("--week-start")
        .map_err(|e| Error::Config(e.to_string()))?
    {
        cfg.week_start = week_start;
    }

    let leftover = args.finish();
    if !leftover.is_empty() {
        return Err(Error::Config(format!(
            "unexpected arguments: {:?} (try --help)",
            leftover
        )));
    }

    let mut calendar = Calendar::new(&cfg);
    render(&calendar);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            prompt()?;
            continue;
        }
        if input == "q" || input == "quit" {
            break;
        }
        if input == "j" {
            print_jump_choices();
            prompt()?;
            continue;
        }

        match parse_intent(input, calendar.state().view_mode) {
            Ok(intent) => {
                if let Some(Event::SelectionChanged(date)) = calendar.apply(intent) {
                    println!("selected {}", date);
                }
                render(&calendar);
            }
            Err(err) => eprintln!("{}", err),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn parse_intent(input: &str, current_view: ViewMode) -> Result<Intent> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        ["n"] => Ok(Intent::Next),
        ["p"] => Ok(Intent::Prev),
        ["t"] => Ok(Intent::Today),
        ["z"] => Ok(Intent::AdvanceZoom),
        ["v"] => Ok(Intent::SetViewMode(current_view.toggled())),
        ["s", date] => Ok(Intent::SelectDate(date.parse()?)),
        ["m", month] => Ok(Intent::SelectMonth(parse_month(month)?)),
        ["y", year] => Ok(Intent::SelectYear(parse_year(year)?)),
        ["u", year] => Ok(Intent::SelectMultiYear(parse_year(year)?)),
        ["j", year, month] => Ok(Intent::JumpTo {
            year: parse_year(year)?,
            month: parse_month(month)?,
        }),
        _ => Err(Error::Config(format!(
            "unknown command '{}' (try --help)",
            input
        ))),
    }
}

fn parse_year(input: &str) -> Result<i32> {
    input
        .parse()
        .map_err(|_| Error::Date(format!("invalid year '{}'", input)))
}

fn parse_month(input: &str) -> Result<u32> {
    input
        .parse()
        .map_err(|_| Error::Date(format!("invalid month '{}'", input)))
}

fn print_jump_choices() {
    println!("years:  {:?}", picker::year_window(CalendarDate::today()));
    println!("months: {:?}", picker::month_items());
}

fn render(calendar: &Calendar) {
    let snapshot = calendar.snapshot();
    let view = match snapshot.state.view_mode {
        ViewMode::Month => "month",
        ViewMode::Week => "week",
    };

    println!();
    println!("== {} ==  [{} view]", snapshot.header, view);
    match &snapshot.units {
        DisplayUnits::Days(cells) => render_day_grid(cells, &snapshot.weekday_labels),
        DisplayUnits::Units(cells) => render_unit_grid(cells, snapshot.state.zoom),
    }
    if let Some(date) = snapshot.selected {
        println!("selected: {}", date);
    }
}

fn render_day_grid(cells: &[DayCell], weekday_labels: &[&'static str; 7]) {
    for label in weekday_labels {
        print!("{:>4}", label);
    }
    println!();
    for row in cells.chunks(7) {
        for cell in row {
            let marker = if cell.is_selected {
                '+'
            } else if cell.is_today {
                '*'
            } else if !cell.in_reference_month {
                '.'
            } else {
                ' '
            };
            print!(" {:>2}{}", cell.date.day(), marker);
        }
        println!();
    }
    println!("(* today, + selected, . adjacent month)");
}

fn render_unit_grid(cells: &[UnitCell], zoom: ZoomLevel) {
    for row in cells.chunks(4) {
        for cell in row {
            let text = match zoom {
                ZoomLevel::MultiYear => {
                    format!("{}-{}", cell.value, cell.value + MULTI_YEAR_UNIT_YEARS - 1)
                }
                _ => cell.value.to_string(),
            };
            let marker = if cell.is_current {
                '*'
            } else if !cell.in_range {
                '.'
            } else {
                ' '
            };
            print!(" {:>9}{}", text, marker);
        }
        println!();
    }
    println!("(* current, . outside range)");
}
