//! Screen layout: the cell list, the status bar and the alert on top.

use super::alert::render_alert;
use super::cell::LogCell;
use super::constants::STATUS_BAR_HEIGHT;
use super::status::status_line;
use super::styles::{CellStyles, MUTED_TEXT};
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen.
///
/// Mounts and unmounts cell detectors to match the list area before drawing,
/// so the detectors rendered here are exactly the ones the commit hook will
/// measure. Returns the list area for mouse hit testing.
pub fn render_layout(frame: &mut Frame, state: &mut AppState, styles: &CellStyles) -> Rect {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
            .areas(frame.area());

    render_cells(frame, list_area, state, styles);
    frame.render_widget(Paragraph::new(status_line(state)), status_area);
    render_alert(frame, &mut state.alert);

    list_area
}

fn render_cells(frame: &mut Frame, area: Rect, state: &mut AppState, styles: &CellStyles) {
    state.sync_viewport(area.height);

    if state.records().is_empty() {
        let placeholder = Paragraph::new("No log records")
            .style(MUTED_TEXT)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let top = state.visible_range().start;
    let slot = state.slot_height();
    let cell_height = state.cell_height();
    let selected = state.selected();

    for (index, record, detector) in state.cells_mut() {
        let offset = u16::try_from(index - top)
            .unwrap_or(u16::MAX)
            .saturating_mul(slot);
        if offset >= area.height {
            break;
        }
        let cell_area = Rect {
            y: area.y + offset,
            height: slot.min(area.height - offset),
            ..area
        };
        let cell = LogCell::new(record, cell_height, styles).selected(index == selected);
        frame.render_stateful_widget(cell, cell_area, detector);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
