//! logcell
//!
//! TUI that shows log records in fixed-height cells and detects, after each
//! frame is committed, which cells clip their content. Truncated cells get a
//! fade and a "View Full Message" banner that opens the record in an alert.
//!
//! Pure core (`truncation`, `model`, `state`) / impure shell (`view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod truncation;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
