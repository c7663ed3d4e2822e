// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the crate's outer layer (configuration files,
/// host-supplied text). The navigation core itself is total: every
/// transition and range computation is defined for all inputs.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Date(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Date(e) => write!(f, "Date Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
