//! One log record drawn as a fixed-height cell.

use super::constants::{CELL_GUTTER, CELL_PADDING};
use super::styles::CellStyles;
use crate::model::LogRecord;
use crate::state::{CellDetector, ChannelViewer, SEPARATOR_ROWS};
use crate::truncation::{RenderConstraint, TruncatedCell};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, StatefulWidget, Widget},
};

/// Marker drawn in the gutter of the selected cell.
pub const SELECTION_MARKER: &str = "▌";

/// A log record in a slot of `cell_height` rows plus a separator.
///
/// Layout of a slot, left to right: gutter, padding, content, padding.
/// The content is handed to [`TruncatedCell`] so overflow is detected and
/// the banner drawn when the record does not fit.
pub struct LogCell<'a> {
    record: &'a LogRecord,
    cell_height: u16,
    selected: bool,
    styles: &'a CellStyles,
}

impl<'a> LogCell<'a> {
    /// Create an unselected cell for `record` with a budget of `cell_height` rows.
    pub fn new(record: &'a LogRecord, cell_height: u16, styles: &'a CellStyles) -> Self {
        Self {
            record,
            cell_height,
            selected: false,
            styles,
        }
    }

    /// Mark the cell as selected: gutter marker and hover-style banner.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Area left for the content inside a slot.
    pub fn content_area(area: Rect, cell_height: u16) -> Rect {
        let inset = CELL_GUTTER + CELL_PADDING;
        Rect {
            x: area.x.saturating_add(inset),
            y: area.y,
            width: area.width.saturating_sub(inset + CELL_PADDING),
            height: area.height.min(cell_height),
        }
    }

    /// Inset box behind a structured record.
    ///
    /// Spans the content and both padding columns so the box reads as a
    /// block of its own against the level background.
    pub fn structured_area(area: Rect, cell_height: u16) -> Rect {
        Rect {
            x: area.x.saturating_add(CELL_GUTTER),
            y: area.y,
            width: area.width.saturating_sub(CELL_GUTTER),
            height: area.height.min(cell_height),
        }
    }
}

impl StatefulWidget for LogCell<'_> {
    type State = CellDetector;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let body = Rect {
            height: area.height.min(self.cell_height),
            ..area
        };
        let level_style = self.styles.level(self.record.level());
        buf.set_style(body, level_style);

        if self.selected {
            for y in body.top()..body.bottom() {
                buf.set_string(body.x, y, SELECTION_MARKER, self.styles.marker());
            }
        }

        let constraint_style = if self.record.is_structured() {
            let inset = Self::structured_area(area, self.cell_height);
            buf.set_style(inset, self.styles.structured());
            self.styles.structured()
        } else {
            level_style
        };
        TruncatedCell::<ChannelViewer>::new(
            self.record.message(),
            RenderConstraint::new(self.cell_height).style(constraint_style),
        )
        .fade_style(self.styles.fade())
        .banner_style(self.styles.banner(self.selected))
        .render(Self::content_area(area, self.cell_height), buf, state);

        if area.height > body.height {
            let separator = Rect {
                y: body.bottom(),
                height: SEPARATOR_ROWS.min(area.height - body.height),
                ..area
            };
            Block::default()
                .borders(Borders::TOP)
                .border_style(self.styles.separator())
                .render(separator, buf);
        }
    }
}
