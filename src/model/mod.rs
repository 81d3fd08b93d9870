//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod level;
pub mod record;

// Re-export for convenience
pub use error::AppError;
pub use key_action::KeyAction;
pub use level::{LevelParseError, LogLevel};
pub use record::{sample_records, LogRecord};
