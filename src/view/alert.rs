//! Full-message alert overlay.
//!
//! Shows the complete text of a truncated cell in a centered popup.
//! Opened by the "View Full Message" banner, dismissed by Esc, q, Enter or
//! any click.

use super::constants::{ALERT_POPUP_HEIGHT_PERCENT, ALERT_POPUP_WIDTH_PERCENT};
use super::styles::{MUTED_TEXT, OVERLAY_BORDER};
use crate::state::AlertState;
use crate::truncation::{wrap::wrap_text, ViewRequest};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Title of the alert popup.
pub const ALERT_TITLE: &str = " Full Message ";

const ALERT_HINT: &str = " Esc/q/Enter close · j/k scroll ";

/// Render the alert centered on the screen, if it is open.
///
/// Records the laid-out content height in `alert` so scrolling stays
/// clamped to what was actually drawn.
pub fn render_alert(frame: &mut Frame, alert: &mut AlertState) {
    let Some(request) = alert.request() else {
        return;
    };

    let popup_area = centered_rect(
        ALERT_POPUP_WIDTH_PERCENT,
        ALERT_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(ALERT_TITLE)
        .borders(Borders::ALL)
        .border_style(OVERLAY_BORDER);
    let inner = block.inner(popup_area);

    let lines: Vec<Line> = layout_message(request, inner.width)
        .into_iter()
        .map(Line::from)
        .collect();
    let content_rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    alert.set_layout(content_rows, inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((alert.scroll_offset(), 0));
    frame.render_widget(paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };
    let hint = Paragraph::new(Line::from(vec![Span::styled(
        ALERT_HINT,
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Rows of the message as laid out at `width` columns.
fn layout_message(request: &ViewRequest, width: u16) -> Vec<String> {
    if request.preformatted {
        wrap_text(&request.message, width)
    } else {
        let collapsed = request.message.split_whitespace().collect::<Vec<_>>().join(" ");
        wrap_text(&collapsed, width)
    }
}

/// Calculate a rect centered in `area` with the given percentage of its size.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = percent_of(area.width, percent_x);
    let height = percent_of(area.height, percent_y);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// `percent` (capped at 100) of `length`, rounded down.
fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}
