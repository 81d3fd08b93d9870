//! Fixed-height cell widget with fade and "View Full Message" banner.

use super::detector::TruncationDetector;
use super::node::CellOutput;
use super::viewer::FullContentViewer;
use super::wrap::wrap_text;
use super::RenderConstraint;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::StatefulWidget,
};
use std::marker::PhantomData;
use unicode_width::UnicodeWidthStr;

/// Text of the affordance shown on overflowing cells.
pub const BANNER_LABEL: &str = " View Full Message ";

/// Rows at the bottom of an overflowing cell covered by the fade.
pub const FADE_ROWS: u16 = 2;

/// Renders content inside a [`RenderConstraint`] and, when the detector says
/// so, overlays the truncation affordance.
///
/// The content is clipped to `min(area.height, constraint.height)` rows.
/// Every render leaves a [`CellOutput`] in the detector for the commit hook.
pub struct TruncatedCell<'a, V> {
    content: &'a str,
    constraint: RenderConstraint,
    content_style: Style,
    fade_style: Style,
    banner_style: Style,
    _viewer: PhantomData<fn() -> V>,
}

impl<'a, V> TruncatedCell<'a, V> {
    /// Create a cell for `content` sized by `constraint`.
    pub fn new(content: &'a str, constraint: RenderConstraint) -> Self {
        Self {
            content,
            constraint,
            content_style: Style::default(),
            fade_style: Style::default().fg(Color::DarkGray),
            banner_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .remove_modifier(Modifier::DIM),
            _viewer: PhantomData,
        }
    }

    /// Style applied to the content text.
    pub fn content_style(mut self, style: Style) -> Self {
        self.content_style = style;
        self
    }

    /// Style of the bottom fade row; the row above it is only dimmed.
    pub fn fade_style(mut self, style: Style) -> Self {
        self.fade_style = style;
        self
    }

    /// Style of the banner.
    pub fn banner_style(mut self, style: Style) -> Self {
        self.banner_style = style;
        self
    }

    fn render_affordance(&self, area: Rect, buf: &mut Buffer) -> Option<Rect> {
        if area.is_empty() {
            return None;
        }

        let fade_rows = FADE_ROWS.min(area.height);
        for i in 0..fade_rows {
            let y = area.bottom() - fade_rows + i;
            let row = Rect::new(area.x, y, area.width, 1);
            buf.set_style(row, Style::default().add_modifier(Modifier::DIM));
            if i + 1 == fade_rows {
                buf.set_style(row, self.fade_style);
            }
        }

        let banner_width = (BANNER_LABEL.width() as u16).min(area.width);
        let banner = Rect::new(
            area.x + (area.width - banner_width) / 2,
            area.bottom() - 1,
            banner_width,
            1,
        );
        buf.set_style(banner, self.banner_style);
        buf.set_stringn(
            banner.x,
            banner.y,
            BANNER_LABEL,
            banner_width as usize,
            self.banner_style,
        );
        Some(banner)
    }
}

impl<V: FullContentViewer> StatefulWidget for TruncatedCell<'_, V> {
    type State = TruncationDetector<V>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = Rect {
            height: area.height.min(self.constraint.height),
            ..area
        };
        buf.set_style(area, self.constraint.style);

        let rows = wrap_text(self.content, area.width);
        for (y, row) in (area.top()..area.bottom()).zip(rows.iter()) {
            buf.set_stringn(area.x, y, row, area.width as usize, self.content_style);
        }

        let banner = if state.is_overflowing() {
            self.render_affordance(area, buf)
        } else {
            None
        };

        state.record_render(
            CellOutput::new(self.content, area.width, self.constraint),
            banner,
        );
    }
}
