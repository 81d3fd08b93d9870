//! Error types for logcell.
//!
//! Each layer has its own `thiserror` enum; `From` conversions let `?` lift
//! them into [`AppError`] at the top.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - Config file lookup, read and parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`TuiError`] - Terminal I/O failures
//!
//! Truncation detection itself never fails: an unmeasurable cell keeps its
//! previous verdict and an empty "view full" request does nothing.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All are fatal: `main` reports them on stderr after the terminal has been
/// restored.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The terminal failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
