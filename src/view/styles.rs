//! Cell styling by log level.

use crate::model::LogLevel;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` flag, the `no_color` config key
/// or the `NO_COLOR` environment variable (all folded into the resolved
/// config before this is built).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved `no_color` setting.
    pub fn new(no_color: bool) -> Self {
        Self { enabled: !no_color }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

// ===== CellStyles =====

const WARNING_TINT: Color = Color::Rgb(48, 38, 8);
const ERROR_TINT: Color = Color::Rgb(56, 12, 18);
const STRUCTURED_BG: Color = Color::Rgb(28, 28, 32);

/// Styles for log cells and their truncation affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyles {
    colors: ColorConfig,
}

impl CellStyles {
    /// Create styles honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Background and text color of a cell.
    ///
    /// - Debug: gray text
    /// - Info: terminal default
    /// - Warning: yellow text on a dark amber tint
    /// - Error, Critical: red text on a dark red tint
    pub fn level(&self, level: LogLevel) -> Style {
        if !self.colors.colors_enabled() {
            return match level {
                LogLevel::Error | LogLevel::Critical => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
        }

        match level {
            LogLevel::Debug => Style::default().fg(Color::DarkGray),
            LogLevel::Info => Style::default(),
            LogLevel::Warning => Style::default().fg(Color::Yellow).bg(WARNING_TINT),
            LogLevel::Error | LogLevel::Critical => Style::default().fg(Color::Red).bg(ERROR_TINT),
        }
    }

    /// Inset box of structured records.
    pub fn structured(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::Gray).bg(STRUCTURED_BG)
        } else {
            Style::default()
        }
    }

    /// Line under each cell.
    pub fn separator(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    /// Gutter marker of the selected cell.
    pub fn marker(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Bottom row of the fade over truncated content.
    pub fn fade(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        }
    }

    /// "View Full Message" banner; `hovered` when its cell is selected.
    pub fn banner(&self, hovered: bool) -> Style {
        let base = Style::default().remove_modifier(Modifier::DIM);
        if !self.colors.colors_enabled() {
            let base = base.add_modifier(Modifier::REVERSED);
            return if hovered {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
        }

        let bg = if hovered { Color::White } else { Color::Gray };
        base.fg(Color::Black).bg(bg)
    }
}

impl Default for CellStyles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Shared Styles =====

/// Muted text for hints and secondary information.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Border of overlay popups.
pub const OVERLAY_BORDER: Style = Style::new().fg(Color::Cyan);

// ===== Tests =====
