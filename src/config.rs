//! This module handles the widget host's configuration, including loading and
//! saving preferences to a `settings.toml` file.
//!
//! Missing files and unparseable content both fall back to defaults: the
//! configuration layer is a convenience, not a validating boundary.
//!
//! # Examples
//!
//! ```no_run
//! use calnav::config;
//! use calnav::date::WeekStart;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Adjust a preference
//! config.week_start = WeekStart::Sunday;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let path = PathBuf::from("./settings.toml");
//! config::save_to_path(&config, &path).expect("Failed to save to path");
//! let loaded = config::load_from_path(&path).expect("Failed to load from path");
//! assert_eq!(loaded.week_start, WeekStart::Sunday);
//! ```

use crate::date::{CalendarDate, WeekStart};
use crate::error::Result;
use crate::navigation::ViewMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "calnav";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// First day of the week for the day grids.
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Reference date to open on. Today when absent.
    #[serde(default)]
    pub initial_date: Option<CalendarDate>,
    #[serde(default)]
    pub initial_selection: Option<CalendarDate>,
    /// Opaque style tokens handed to the renderer untouched.
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
