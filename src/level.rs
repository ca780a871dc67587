//! Log levels and their display symbols.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity/category tag for a log call.
///
/// The set is closed and every level carries exactly one display symbol, so
/// an "unknown level with undefined formatting" cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Verbose,
    Info,
    Success,
    Warn,
    Error,
}

impl Level {
    /// All levels, least to most severe.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Verbose,
        Level::Info,
        Level::Success,
        Level::Warn,
        Level::Error,
    ];

    /// Fixed-width three-character glyph shown before the message body.
    ///
    /// Info is deliberately blank so ordinary output lines up with the
    /// decorated ones without drawing attention to itself.
    pub const fn symbol(self) -> &'static str {
        match self {
            Level::Debug => " \u{271A} ",   // ✚
            Level::Verbose => " \u{2731} ", // ✱
            Level::Info => "   ",
            Level::Success => " \u{2713} ", // ✓
            Level::Warn => " ! ",
            Level::Error => " \u{2716} ",   // ✖
        }
    }

    /// Lowercase level name. Also the key looked up in a
    /// [`ColorMap`](crate::ColorMap) when colorizing the symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Verbose => "verbose",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no known level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::Debug),
            "verbose" => Ok(Level::Verbose),
            "info" => Ok(Level::Info),
            "success" => Ok(Level::Success),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
