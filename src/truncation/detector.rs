//! Stateful overflow detector owned by each mounted cell.

use super::node::{CellOutput, RenderedNode};
use super::overflow::{transition, OverflowState};
use super::viewer::{FullContentViewer, ViewRequest};
use ratatui::layout::{Position, Rect};
use tracing::{debug, trace};

/// State of one truncated cell, rendered through
/// [`TruncatedCell`](super::TruncatedCell).
///
/// # Lifecycle
/// - Created `Fitting` when the cell mounts.
/// - Each render records a [`CellOutput`].
/// - The owner calls [`after_commit`](Self::after_commit) once the frame is
///   on screen; a `true` return means the verdict flipped and the cell must be
///   rendered again to show or hide the affordance.
/// - Dropped when the cell unmounts.
#[derive(Debug)]
pub struct TruncationDetector<V> {
    overflow: OverflowState,
    viewer: V,
    output: Option<CellOutput>,
    banner: Option<Rect>,
    /// Set by render, cleared by the commit hook.
    fresh: bool,
}

impl<V: FullContentViewer> TruncationDetector<V> {
    /// Mount a detector that reports full content to `viewer`.
    pub fn new(viewer: V) -> Self {
        Self {
            overflow: OverflowState::Fitting,
            viewer,
            output: None,
            banner: None,
            fresh: false,
        }
    }

    /// Current verdict.
    pub fn state(&self) -> OverflowState {
        self.overflow
    }

    /// True when the fade and banner are rendered.
    pub fn is_overflowing(&self) -> bool {
        self.overflow.is_overflowing()
    }

    /// Output of the most recent render, if any.
    pub fn output(&self) -> Option<&CellOutput> {
        self.output.as_ref()
    }

    /// Area of the banner as last rendered.
    pub fn banner_area(&self) -> Option<Rect> {
        self.banner
    }

    /// The injected viewer.
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Check whether a terminal position hits the rendered banner.
    pub fn banner_contains(&self, position: Position) -> bool {
        self.is_overflowing() && self.banner.is_some_and(|area| area.contains(position))
    }

    pub(crate) fn record_render(&mut self, output: CellOutput, banner: Option<Rect>) {
        self.output = Some(output);
        self.banner = banner;
        self.fresh = true;
    }

    /// Measurement hook, to be called after the frame holding this cell has
    /// been committed.
    ///
    /// Measures the output of the last render against the constraint it was
    /// rendered with. Returns `true` only if the verdict changed. Skips
    /// silently (returns `false`, state untouched) when the cell was not
    /// rendered since the previous commit or its output cannot be measured.
    pub fn after_commit(&mut self) -> bool {
        if !std::mem::take(&mut self.fresh) {
            trace!("Cell not rendered since last commit, skipping measurement");
            return false;
        }

        let measured = self
            .output
            .as_ref()
            .map(|output| (output.content_extent(), output.constraint().height));

        match measured {
            Some((Some(extent), budget)) => self.settle(extent, budget),
            _ => {
                trace!("Cell output unmeasurable, skipping");
                false
            }
        }
    }

    /// Measure an arbitrary rendered node against `budget`.
    ///
    /// Same contract as [`after_commit`](Self::after_commit) for callers that
    /// hold their own node handle.
    pub fn measure<N: RenderedNode + ?Sized>(&mut self, node: &N, budget: u16) -> bool {
        match node.content_extent() {
            Some(extent) => self.settle(extent, budget),
            None => false,
        }
    }

    fn settle(&mut self, extent: usize, budget: u16) -> bool {
        let next = transition(self.overflow, extent, budget);
        if next == self.overflow {
            return false;
        }

        debug!(from = ?self.overflow, to = ?next, extent, budget, "Overflow state changed");
        self.overflow = next;
        if !next.is_overflowing() {
            self.banner = None;
        }
        true
    }

    /// "View full" action: hand the full rendered text to the viewer.
    ///
    /// No-op when nothing has been rendered or the content has no text.
    pub fn view_full(&mut self) {
        let Some(message) = self.output.as_ref().and_then(|o| o.text()).map(str::to_owned) else {
            debug!("View full requested on a cell without text");
            return;
        };

        debug!(len = message.len(), "Opening full message");
        self.viewer.display(ViewRequest::preformatted(message));
    }
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
