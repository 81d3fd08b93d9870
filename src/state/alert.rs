//! State for the full-message alert overlay.

use crate::truncation::ViewRequest;

/// State for the alert that shows a truncated message in full.
///
/// # Cardinality
/// - When closed: 1 state (no request)
/// - When open: one state per (request, scroll offset)
/// - Opening always resets scrolling to the top
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    request: Option<ViewRequest>,
    scroll_offset: u16,
    /// Rows of laid-out content, as of the last render.
    content_rows: u16,
    /// Rows visible inside the popup, as of the last render.
    viewport_rows: u16,
}

impl AlertState {
    /// Create alert state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the alert is visible.
    pub fn is_visible(&self) -> bool {
        self.request.is_some()
    }

    /// Open the alert on `request`, replacing whatever was shown.
    pub fn open(&mut self, request: ViewRequest) {
        self.request = Some(request);
        self.scroll_offset = 0;
    }

    /// Close the alert.
    pub fn close(&mut self) {
        self.request = None;
        self.scroll_offset = 0;
    }

    /// Request currently shown.
    pub fn request(&self) -> Option<&ViewRequest> {
        self.request.as_ref()
    }

    /// First visible content row.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Scroll one row up, clamping at the top.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll one row down, clamping so the last row stays at the bottom.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
    }

    /// Record the laid-out size from the last render.
    pub fn set_layout(&mut self, content_rows: u16, viewport_rows: u16) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.viewport_rows)
    }
}
