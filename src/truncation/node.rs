//! Handles to rendered cell output.

use super::wrap::wrapped_height;
use super::RenderConstraint;

/// What the detector can learn about its rendered content.
pub trait RenderedNode {
    /// Intrinsic height of the content in rows, ignoring the clip applied by
    /// the height budget. `None` when the node cannot be measured.
    fn content_extent(&self) -> Option<usize>;

    /// Literal text of the rendered content, `None` when there is none.
    fn text(&self) -> Option<&str>;
}

/// Record of one render of a [`TruncatedCell`](super::TruncatedCell).
///
/// Written by the widget during render and read back by the detector after
/// the frame has been committed to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOutput {
    text: String,
    content_width: u16,
    constraint: RenderConstraint,
}

impl CellOutput {
    pub(crate) fn new(text: &str, content_width: u16, constraint: RenderConstraint) -> Self {
        Self {
            text: text.to_string(),
            content_width,
            constraint,
        }
    }

    /// Width in columns the text was laid out at.
    pub fn content_width(&self) -> u16 {
        self.content_width
    }

    /// Constraint in force for this render.
    pub fn constraint(&self) -> &RenderConstraint {
        &self.constraint
    }
}

impl RenderedNode for CellOutput {
    fn content_extent(&self) -> Option<usize> {
        wrapped_height(&self.text, self.content_width)
    }

    fn text(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_is_wrapped_row_count() {
        let output = CellOutput::new("abcdefgh\nij", 4, RenderConstraint::new(1));
        assert_eq!(output.content_extent(), Some(3));
    }

    #[test]
    fn zero_width_output_is_unmeasurable() {
        let output = CellOutput::new("abc", 0, RenderConstraint::new(1));
        assert_eq!(output.content_extent(), None);
    }

    #[test]
    fn empty_text_extracts_nothing() {
        let output = CellOutput::new("", 10, RenderConstraint::new(1));
        assert_eq!(output.text(), None);
    }

    #[test]
    fn whitespace_text_is_still_text() {
        let output = CellOutput::new("  ", 10, RenderConstraint::new(1));
        assert_eq!(output.text(), Some("  "));
    }
}
