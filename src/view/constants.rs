//! Layout and timing constants for TUI rendering.

use std::time::Duration;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Columns reserved at the left of each cell for the selection marker.
pub const CELL_GUTTER: u16 = 1;

/// Horizontal padding on each side of the cell content.
pub const CELL_PADDING: u16 = 1;

/// Width percentage for the full-message popup.
pub const ALERT_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage for the full-message popup.
pub const ALERT_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Upper bound on render passes per frame.
///
/// One pass renders, the next picks up verdicts changed by the commit hook.
/// A third only happens if a verdict changes twice, which settles after it.
pub const MAX_RENDER_PASSES: usize = 3;

/// How long the event loop waits for input before redrawing.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
