//! Break-all text wrapping shared by rendering and measurement.
//!
//! Cells lay text out like `white-space: pre-wrap; word-break: break-all`:
//! whitespace is kept verbatim and rows break at the column limit regardless
//! of word boundaries. The widget draws [`wrap_text`] and the overflow
//! measurement counts [`wrapped_height`]. Both run the same line layout, so
//! the measured extent is always the extent that was drawn.

use unicode_width::UnicodeWidthChar;

/// Columns a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Wrap `text` into rows no wider than `width` display columns.
///
/// Empty text produces zero rows; an empty logical line produces one empty
/// row. A glyph wider than `width` is placed on a row of its own rather than
/// dropped. Returns an empty vec when `width` is 0.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Rows::default();
    for line in text.lines() {
        layout_line(line, width, &mut rows);
    }
    rows.rows
}

/// Number of rows `text` occupies at `width`, or `None` if nothing can be
/// laid out at that width.
///
/// Counts row breaks without building the rows.
pub fn wrapped_height(text: &str, width: u16) -> Option<usize> {
    let width = width as usize;
    if width == 0 {
        return None;
    }

    let mut count = RowCount::default();
    for line in text.lines() {
        layout_line(line, width, &mut count);
    }
    Some(count.0)
}

/// Receives the output of [`layout_line`].
trait RowSink {
    /// Place one glyph (tabs arrive already expanded) on the current row.
    fn place(&mut self, ch: char);
    /// Close the current row.
    fn end_row(&mut self);
}

#[derive(Default)]
struct Rows {
    rows: Vec<String>,
    row: String,
}

impl RowSink for Rows {
    fn place(&mut self, ch: char) {
        self.row.push(ch);
    }

    fn end_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
    }
}

#[derive(Default)]
struct RowCount(usize);

impl RowSink for RowCount {
    fn place(&mut self, _ch: char) {}

    fn end_row(&mut self) {
        self.0 += 1;
    }
}

/// Lay out one logical line. Always closes at least one row.
fn layout_line<S: RowSink>(line: &str, width: usize, sink: &mut S) {
    let mut row_width = 0;

    for ch in line.chars() {
        if ch == '\t' {
            for _ in 0..TAB_WIDTH {
                if row_width + 1 > width {
                    sink.end_row();
                    row_width = 0;
                }
                sink.place(' ');
                row_width += 1;
            }
            continue;
        }

        let ch_width = ch.width().unwrap_or(0);
        if ch_width > 0 && row_width + ch_width > width && row_width > 0 {
            sink.end_row();
            row_width = 0;
        }
        sink.place(ch);
        row_width += ch_width;
    }

    sink.end_row();
}
