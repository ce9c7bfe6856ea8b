//! Spinner and status lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{Palette, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

/// Spinner animation frames
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (~100ms at 60fps)
const SPINNER_TICKS: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    /// Spinner at the frame for `tick`.
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: spinner_frame(tick),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner frame index for a UI tick.
pub fn spinner_frame(tick: u64) -> usize {
    ((tick / SPINNER_TICKS) % SPINNER_FRAMES.len() as u64) as usize
}

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// One styled line for the indicator.
pub fn render_status_indicator(indicator: &StatusIndicatorType, palette: &Palette) -> Line<'static> {
    let (icon, message, color) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            (get_spinner_char(*frame).to_string(), message, palette.primary)
        }
        StatusIndicatorType::Success { message } => ("✓".to_string(), message, COLOR_SUCCESS),
        StatusIndicatorType::Error { message } => ("✗".to_string(), message, COLOR_ERROR),
        StatusIndicatorType::Info { message } => ("ℹ".to_string(), message, COLOR_INFO),
    };

    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    #[test]
    fn test_spinner_cycles_with_ticks() {
        assert_eq!(spinner_frame(0), 0);
        assert_eq!(spinner_frame(SPINNER_TICKS), 1);
        assert_eq!(spinner_frame(SPINNER_TICKS * 4), 0);
        assert_eq!(get_spinner_char(5), '◓');
    }

    #[test]
    fn test_render_lines() {
        let palette = Theme::Dark.palette();
        let line = render_status_indicator(&StatusIndicatorType::spinner("Loading", 0), palette);
        assert_eq!(line.spans[0].content, "◐ ");
        assert_eq!(line.spans[1].content, "Loading");

        let line = render_status_indicator(&StatusIndicatorType::error("Nope"), palette);
        assert_eq!(line.spans[0].content, "✗ ");
    }
}
