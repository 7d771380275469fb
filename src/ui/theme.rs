//! Theme and styling configuration.
//!
//! The core only picks colors from here; widgets declare structure and pass
//! theme colors through, so restyling never touches rendering logic.

use ratatui::style::Color;

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Highlight color for the focused input and the row cursor.
    pub highlight: Color,
    /// Dimmed color for placeholders, borders, and hints.
    pub dim: Color,
    /// Background of the row the cursor is on.
    pub cursor_bg: Color,
}

impl Theme {
    /// Look up a theme by its configured name. Unknown names fall back to
    /// the dark theme.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            highlight: Color::Cyan,
            dim: Color::DarkGray,
            cursor_bg: Color::Rgb(60, 60, 60),
        }
    }

    /// A light theme for bright terminals.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            highlight: Color::Blue,
            dim: Color::Gray,
            cursor_bg: Color::Rgb(220, 220, 220),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
