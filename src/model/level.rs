//! Severity of a log record.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity used to colour a log cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// Diagnostic noise, rendered muted.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Something unexpected that did not fail.
    Warning,
    /// A failure.
    Error,
    /// A failure that stopped the run.
    Critical,
}

/// Unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level '{0}' (expected debug, info, warning, error or critical)")]
pub struct LevelParseError(pub String);

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}
