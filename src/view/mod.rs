//! TUI rendering and terminal management (impure shell)

pub mod alert;
pub mod cell;
pub mod constants;
mod layout;
mod status;
pub mod styles;

pub use alert::render_alert;
pub use cell::LogCell;
pub use layout::render_layout;
pub use styles::{CellStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{KeyAction, LogRecord};
use crate::state::AppState;
use constants::{MAX_RENDER_PASSES, POLL_INTERVAL};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: CellStyles,
    /// Last rendered list area (for mouse click detection)
    last_list_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(records: Vec<LogRecord>, config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            AppState::new(records, config.cell_height),
            KeyBindings::default(),
            CellStyles::new(ColorConfig::new(config.no_color)),
        ))
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create a TuiApp around an already set-up terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: CellStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            last_list_area: None,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every event and
    /// every poll timeout.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }

            self.app_state.pump_view_requests();
            self.draw()?;
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The alert captures keys while it is open
        if self.app_state.alert.is_visible() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => self.app_state.alert.close(),
                KeyCode::Char('j') | KeyCode::Down => self.app_state.alert.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => self.app_state.alert.scroll_up(),
                _ => {}
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::SelectNext => self.app_state.select_next(),
            KeyAction::SelectPrev => self.app_state.select_prev(),
            KeyAction::SelectFirst => self.app_state.select_first(),
            KeyAction::SelectLast => self.app_state.select_last(),
            KeyAction::ViewFull => {
                if !self.app_state.view_full_selected() {
                    debug!(selected = self.app_state.selected(), "Selected cell is not truncated");
                }
            }
            KeyAction::Quit => return true,
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left-click on a banner opens the full message, on a cell selects it.
    /// The wheel moves the selection, or scrolls the alert when it is open.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.alert.is_visible() {
            match mouse.kind {
                MouseEventKind::ScrollUp => self.app_state.alert.scroll_up(),
                MouseEventKind::ScrollDown => self.app_state.alert.scroll_down(),
                MouseEventKind::Down(MouseButton::Left) => self.app_state.alert.close(),
                _ => {}
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.app_state.select_prev(),
            MouseEventKind::ScrollDown => self.app_state.select_next(),
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                if let Some(index) = self.app_state.banner_at(position) {
                    self.app_state.select(index);
                    self.app_state.view_full(index);
                } else if let Some(index) = self.cell_at(position) {
                    self.app_state.select(index);
                }
            }
            _ => {}
        }
    }

    /// Index of the record whose slot contains `position`.
    fn cell_at(&self, position: Position) -> Option<usize> {
        let area = self.last_list_area?;
        if !area.contains(position) {
            return None;
        }
        let range = self.app_state.visible_range();
        let slot = self.app_state.slot_height().max(1);
        let index = range.start + usize::from((position.y - area.y) / slot);
        range.contains(&index).then_some(index)
    }

    /// Render the current frame until every cell's verdict has settled.
    ///
    /// Each pass commits a frame and then runs the commit hook of every
    /// mounted cell. A changed verdict needs one more pass to show (or hide)
    /// its affordance. Returns the number of passes drawn.
    fn draw(&mut self) -> Result<usize, TuiError> {
        let styles = self.styles;

        for pass in 1..=MAX_RENDER_PASSES {
            let state = &mut self.app_state;
            let mut list_area = Rect::default();
            self.terminal.draw(|frame| {
                list_area = render_layout(frame, state, &styles);
            })?;
            self.last_list_area = Some(list_area);

            if !self.app_state.after_commit() {
                return Ok(pass);
            }
            debug!(pass, "Verdicts changed, drawing corrective pass");
        }

        warn!(
            passes = MAX_RENDER_PASSES,
            "Cell verdicts still changing after render pass limit"
        );
        Ok(MAX_RENDER_PASSES)
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a frame, returning the number of passes (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<usize, TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on every exit path, panics included.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(records: Vec<LogRecord>, config: &ResolvedConfig) -> Result<(), TuiError> {
    install_panic_hook();

    info!(records = records.len(), cell_height = config.cell_height, "Starting TUI");
    let mut app = TuiApp::new(records, config)?;
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;
    info!(ok = result.is_ok(), "TUI stopped");

    result
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore_terminal() {
            eprintln!("Failed to restore terminal: {}", e);
        }
        default_hook(info);
    }));
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogLevel;
    use ratatui::backend::TestBackend;

    const TRACEBACK: &str = "Traceback (most recent call last):\n  line 1\n  line 2\n  line 3";

    // Helper to create test TuiApp
    fn create_test_app(records: Vec<LogRecord>) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        TuiApp::with_terminal(
            terminal,
            AppState::new(records, 2),
            KeyBindings::default(),
            CellStyles::default(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app(Vec::new());
        assert!(app.handle_key(key(KeyCode::Char('q'))), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app(Vec::new());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c), "Ctrl+C should trigger quit");
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app(Vec::new());
        assert!(!app.handle_key(key(KeyCode::Char('x'))));
    }

    #[test]
    fn draw_settles_in_one_pass_when_everything_fits() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Info, "short")]);
        assert_eq!(app.draw().unwrap(), 1);
    }

    #[test]
    fn draw_settles_in_two_passes_when_a_cell_overflows() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Error, TRACEBACK)]);
        assert_eq!(app.draw().unwrap(), 2);
        assert_eq!(app.draw().unwrap(), 1, "settled verdict needs no extra pass");
    }

    #[test]
    fn enter_on_truncated_cell_opens_alert() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Error, TRACEBACK)]);
        app.draw().unwrap();

        app.handle_key(key(KeyCode::Enter));

        let request = app.app_state.alert.request().expect("alert should be open");
        assert_eq!(request.message, TRACEBACK);
    }

    #[test]
    fn enter_on_fitting_cell_does_nothing() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Info, "short")]);
        app.draw().unwrap();

        app.handle_key(key(KeyCode::Enter));

        assert!(!app.app_state.alert.is_visible());
    }

    #[test]
    fn q_closes_alert_instead_of_quitting() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Error, TRACEBACK)]);
        app.draw().unwrap();
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert!(!app.app_state.alert.is_visible());
    }

    #[test]
    fn clicking_banner_opens_alert() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Error, TRACEBACK)]);
        app.draw().unwrap();

        let banner = app
            .app_state
            .detector(0)
            .and_then(|d| d.banner_area())
            .expect("overflowing cell has a banner");
        app.handle_mouse(click(banner.x, banner.y));

        assert!(app.app_state.alert.is_visible());
    }

    #[test]
    fn clicking_cell_body_selects_without_opening() {
        let records = vec![
            LogRecord::new(LogLevel::Info, "first"),
            LogRecord::new(LogLevel::Error, TRACEBACK),
        ];
        let mut app = create_test_app(records);
        app.draw().unwrap();

        // Second slot starts at row 3; its first row holds text, not the banner.
        app.handle_mouse(click(5, 3));

        assert_eq!(app.app_state.selected(), 1);
        assert!(!app.app_state.alert.is_visible());
    }

    #[test]
    fn any_click_closes_alert() {
        let mut app = create_test_app(vec![LogRecord::new(LogLevel::Error, TRACEBACK)]);
        app.draw().unwrap();
        app.handle_key(key(KeyCode::Enter));

        app.handle_mouse(click(0, 0));

        assert!(!app.app_state.alert.is_visible());
    }

    #[test]
    fn wheel_moves_selection() {
        let records = vec![
            LogRecord::new(LogLevel::Info, "a"),
            LogRecord::new(LogLevel::Info, "b"),
        ];
        let mut app = create_test_app(records);
        app.draw().unwrap();

        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.app_state.selected(), 1);
        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.app_state.selected(), 0);
    }
}
