//! Truncation detection for fixed-height cells (pure core).
//!
//! A cell renders optimistically as if its content fits, then measures the
//! laid-out content once the frame has been committed. If the content is
//! taller than the budget, the detector flips to [`OverflowState::Overflowing`]
//! and asks for one more render, which draws a fade and a
//! "View Full Message" banner. Activating the banner hands the full text to a
//! [`FullContentViewer`].
//!
//! Terminal sizes are unknown until layout, so the verdict always lags the
//! screen by at most one render pass.

mod detector;
mod node;
mod overflow;
pub mod viewer;
mod widget;
pub mod wrap;

pub use detector::TruncationDetector;
pub use node::{CellOutput, RenderedNode};
pub use overflow::{transition, OverflowState};
pub use viewer::{FullContentViewer, ViewRequest};
pub use widget::{TruncatedCell, BANNER_LABEL, FADE_ROWS};

use ratatui::style::Style;

/// Sizing constraint supplied by the enclosing list.
///
/// `height` is the number of rows the content may occupy before it counts as
/// overflowing; `style` is applied to the whole box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConstraint {
    /// Height budget in rows.
    pub height: u16,
    /// Style of the sized box.
    pub style: Style,
}

impl RenderConstraint {
    /// Constraint with the given height and default style.
    pub fn new(height: u16) -> Self {
        Self {
            height,
            style: Style::default(),
        }
    }

    /// Set the box style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
