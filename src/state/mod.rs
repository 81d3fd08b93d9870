//! Application state (pure, no terminal access).

pub mod alert;
mod app_state;

pub use alert::AlertState;
pub use app_state::{AppState, CellDetector, ChannelViewer, SEPARATOR_ROWS};
