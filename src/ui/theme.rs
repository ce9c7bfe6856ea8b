//! Color palettes.
//!
//! Two palettes, dark (default) and light. The active one is held in memory
//! only and toggled with `t`.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Shared colors
// ============================================================================

/// Success toasts and the sent notice - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error toasts and validation messages
pub const COLOR_ERROR: Color = Color::Red;

/// Info toasts
pub const COLOR_INFO: Color = Color::Cyan;

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Colors used by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    /// Primary accent - active tab, headings, highlighted skill bars
    pub primary: Color,
    /// Secondary accent - regular skill bars, links
    pub secondary: Color,
    /// Backdrop stars and shapes
    pub backdrop: Color,
    /// Large backdrop label
    pub backdrop_label: Color,
    pub input_bg: Color,
}

pub static DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 24),
    text: Color::Rgb(226, 232, 240),
    dim: Color::DarkGray,
    border: Color::Rgb(51, 65, 85),
    primary: Color::Rgb(99, 102, 241),
    secondary: Color::Rgb(168, 85, 247),
    backdrop: Color::Rgb(71, 85, 105),
    backdrop_label: Color::Rgb(30, 35, 60),
    input_bg: Color::Rgb(20, 20, 30),
};

pub static LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    text: Color::Rgb(15, 23, 42),
    dim: Color::Gray,
    border: Color::Rgb(203, 213, 225),
    primary: Color::Rgb(79, 70, 229),
    secondary: Color::Rgb(147, 51, 234),
    backdrop: Color::Rgb(148, 163, 184),
    backdrop_label: Color::Rgb(226, 232, 240),
    input_bg: Color::Rgb(241, 245, 249),
};

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::UNDERLINED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
