//! One-line status bar: position, level and key hints.

use super::styles::MUTED_TEXT;
use crate::state::AppState;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Build the status line for the current selection.
///
/// The "view full" hint only appears when the selected cell is truncated.
pub fn status_line(state: &AppState) -> Line<'static> {
    let total = state.records().len();
    if total == 0 {
        return Line::from(vec![
            Span::styled(" No records ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("  q quit", MUTED_TEXT),
        ]);
    }

    let selected = state.selected();
    let level = state.records()[selected].level();
    let truncated = state
        .detector(selected)
        .is_some_and(|detector| detector.is_overflowing());

    let mut spans = vec![
        Span::styled(
            format!(" {}/{} ", selected + 1, total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} ", level)),
    ];
    if truncated {
        spans.push(Span::styled(
            " [truncated] ",
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    }

    let mut hints = String::from("  j/k select");
    if truncated {
        hints.push_str("  Enter view full");
    }
    hints.push_str("  q quit");
    spans.push(Span::styled(hints, MUTED_TEXT));

    Line::from(spans)
}
