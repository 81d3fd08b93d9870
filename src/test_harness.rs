//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::KeyBindings;
use crate::model::LogRecord;
use crate::state::AppState;
use crate::view::{CellStyles, ColorConfig, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing whitespace and empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over `records` with an 80x24 terminal and 8-row cells.
    #[allow(dead_code)]
    pub fn new(records: Vec<LogRecord>) -> Result<Self, TuiError> {
        Self::with_size(records, 80, 24, 8)
    }

    /// Harness with a custom terminal size and cell height.
    ///
    /// Colors are disabled so snapshots only depend on text.
    pub fn with_size(
        records: Vec<LogRecord>,
        width: u16,
        height: u16,
        cell_height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::with_terminal(
            terminal,
            AppState::new(records, cell_height),
            KeyBindings::default(),
            CellStyles::new(ColorConfig::new(true)),
        );

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw a settled frame, returning the number of render passes it took.
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn draw(&mut self) -> usize {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness")
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.draw();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Banner area of a mounted cell, if it is overflowing.
    pub fn banner_of(&self, index: usize) -> Option<Rect> {
        self.state().detector(index).and_then(|d| d.banner_area())
    }

    /// Send a left click at the specified coordinates
    ///
    /// Draws first so hit testing sees the current layout.
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }

        self.draw();
        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }
}
