//! TUI theme and styles

use ratatui::style::{Color, Style};

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Cyan;

    /// Error color
    pub const ERROR: Color = Color::Red;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Focused form field / input style
    pub fn focused() -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Placeholder text style
    pub fn placeholder() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }
}
