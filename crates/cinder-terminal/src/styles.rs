//! # Terminal Styles
//!
//! Palette and named styles shared by every screen.

use ratatui::style::{Color, Modifier, Style};

/// Colors used by the terminal screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Titles and the selected action
    pub accent: Color,
    /// Destructive actions and error text
    pub danger: Color,
    /// In-flight operations
    pub pending: Color,
    /// Body text
    pub text: Color,
    /// Hints and secondary text
    pub muted: Color,
    /// Panel borders
    pub border: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Palette for dark terminals
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            danger: Color::Red,
            pending: Color::Yellow,
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
        }
    }

    /// Palette for light terminals
    pub const fn light() -> Self {
        Self {
            accent: Color::Blue,
            danger: Color::Red,
            pending: Color::Magenta,
            text: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

/// Named styles derived from a palette
#[derive(Debug, Clone, Default)]
pub struct Styles {
    /// Color palette
    pub palette: ColorPalette,
}

impl Styles {
    /// Create styles with the given palette
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Body text
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    /// Hints and secondary text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    /// Screen and header titles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Error text
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.palette.danger)
    }

    /// Destructive action label
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.palette.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// In-flight operation label
    pub fn pending(&self) -> Style {
        Style::default()
            .fg(self.palette.pending)
            .add_modifier(Modifier::ITALIC)
    }

    /// Panel borders
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ColorPalette::default(), ColorPalette::dark());
    }

    #[test]
    fn test_light_palette() {
        let palette = ColorPalette::light();
        assert_eq!(palette.text, Color::Black);
    }

    #[test]
    fn test_danger_is_bold() {
        let styles = Styles::default();
        let danger = styles.danger();
        assert_eq!(danger.fg, Some(Color::Red));
        assert!(danger.add_modifier.contains(Modifier::BOLD));
    }
}
