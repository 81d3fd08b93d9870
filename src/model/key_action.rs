//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Select the next cell. Default: j/↓
    SelectNext,
    /// Select the previous cell. Default: k/↑
    SelectPrev,
    /// Select the first cell. Default: g/Home
    SelectFirst,
    /// Select the last cell. Default: G/End
    SelectLast,

    // Truncation
    /// Open the selected cell's full message, if it is truncated. Default: Enter/v
    ViewFull,

    // Application
    /// Quit the application. Default: q
    Quit,
}
