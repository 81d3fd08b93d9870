//! Application state: records, mounted cells, selection and alert.

use super::alert::AlertState;
use crate::model::LogRecord;
use crate::truncation::{TruncationDetector, ViewRequest};
use ratatui::layout::Position;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::mpsc;
use tracing::debug;

/// Viewer handed to every cell: requests are queued for the event loop.
pub type ChannelViewer = mpsc::Sender<ViewRequest>;

/// Detector type used by application cells.
pub type CellDetector = TruncationDetector<ChannelViewer>;

/// Rows between two cells.
pub const SEPARATOR_ROWS: u16 = 1;

/// Top-level application state.
///
/// Only records inside the viewport have a mounted [`CellDetector`]; a cell
/// scrolled out of view is dropped along with its overflow verdict and starts
/// again from `Fitting` when it comes back.
#[derive(Debug)]
pub struct AppState {
    records: Vec<LogRecord>,
    mounted: BTreeMap<usize, CellDetector>,
    selected: usize,
    top: usize,
    /// Cells that fit in the viewport, as of the last sync.
    capacity: usize,
    cell_height: u16,
    /// Full-message overlay.
    pub alert: AlertState,
    viewer: ChannelViewer,
    requests: mpsc::Receiver<ViewRequest>,
}

impl AppState {
    /// Create state for `records` shown in cells `cell_height` rows tall.
    pub fn new(records: Vec<LogRecord>, cell_height: u16) -> Self {
        let (viewer, requests) = mpsc::channel();
        Self {
            records,
            mounted: BTreeMap::new(),
            selected: 0,
            top: 0,
            capacity: 1,
            cell_height,
            alert: AlertState::new(),
            viewer,
            requests,
        }
    }

    /// All records, in display order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Row budget of every cell.
    pub fn cell_height(&self) -> u16 {
        self.cell_height
    }

    /// Rows taken by one cell including its separator.
    pub fn slot_height(&self) -> u16 {
        self.cell_height.saturating_add(SEPARATOR_ROWS)
    }

    /// Index of the selected record (0 when there are none).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Records currently in the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.top + self.capacity).min(self.records.len());
        self.top.min(end)..end
    }

    // ===== Selection =====

    /// Move the selection down one record, stopping at the last.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
        self.keep_selection_visible();
    }

    /// Move the selection up one record, stopping at the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.keep_selection_visible();
    }

    /// Select the first record.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.keep_selection_visible();
    }

    /// Select the last record.
    pub fn select_last(&mut self) {
        self.selected = self.records.len().saturating_sub(1);
        self.keep_selection_visible();
    }

    /// Select a record by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.records.len() {
            self.selected = index;
            self.keep_selection_visible();
        }
    }

    fn keep_selection_visible(&mut self) {
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + self.capacity {
            self.top = self.selected + 1 - self.capacity;
        }
    }

    // ===== Mount lifecycle =====

    /// Fit the viewport to `list_height` rows, mounting cells that scrolled
    /// in and dropping cells that scrolled out.
    pub fn sync_viewport(&mut self, list_height: u16) {
        self.capacity = (list_height / self.slot_height().max(1)).max(1) as usize;
        self.keep_selection_visible();

        let range = self.visible_range();
        let before = self.mounted.len();
        self.mounted.retain(|index, _| range.contains(index));
        let unmounted = before - self.mounted.len();

        let mut mounted = 0;
        for index in range {
            self.mounted.entry(index).or_insert_with(|| {
                mounted += 1;
                TruncationDetector::new(self.viewer.clone())
            });
        }

        if mounted > 0 || unmounted > 0 {
            debug!(mounted, unmounted, top = self.top, "Viewport cells changed");
        }
    }

    /// Detector of a mounted cell.
    pub fn detector(&self, index: usize) -> Option<&CellDetector> {
        self.mounted.get(&index)
    }

    /// Mounted cells in display order, with their records.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (usize, &LogRecord, &mut CellDetector)> + '_ {
        let records = &self.records;
        self.mounted
            .iter_mut()
            .map(move |(index, detector)| (*index, &records[*index], detector))
    }

    /// Run the commit hook of every mounted cell.
    ///
    /// Returns `true` if any verdict changed and the frame must be redrawn.
    pub fn after_commit(&mut self) -> bool {
        let mut changed = false;
        for (index, detector) in &mut self.mounted {
            if detector.after_commit() {
                debug!(
                    index = *index,
                    overflowing = detector.is_overflowing(),
                    "Cell verdict changed"
                );
                changed = true;
            }
        }
        changed
    }

    // ===== View full =====

    /// Run the "view full" action of a mounted cell and open the alert.
    pub fn view_full(&mut self, index: usize) {
        if let Some(detector) = self.mounted.get_mut(&index) {
            detector.view_full();
        }
        self.pump_view_requests();
    }

    /// "View full" on the selected cell, only if its affordance is shown.
    ///
    /// Returns `true` if the action ran.
    pub fn view_full_selected(&mut self) -> bool {
        let overflowing = self
            .detector(self.selected)
            .is_some_and(CellDetector::is_overflowing);
        if overflowing {
            self.view_full(self.selected);
        }
        overflowing
    }

    /// Cell whose banner is at `position`, if any.
    pub fn banner_at(&self, position: Position) -> Option<usize> {
        self.mounted
            .iter()
            .find(|(_, detector)| detector.banner_contains(position))
            .map(|(index, _)| *index)
    }

    /// Move queued view requests into the alert.
    pub fn pump_view_requests(&mut self) {
        while let Ok(request) = self.requests.try_recv() {
            debug!(len = request.message.len(), "Showing full message");
            self.alert.open(request);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
