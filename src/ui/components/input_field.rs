//! Text input field built from plain lines.
//!
//! Fields are produced as lines rather than drawn into a `Rect` so they can
//! live inside a scrolled section body.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::text::{truncate, wrap_text};
use crate::ui::theme::{Palette, COLOR_ERROR};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Draw the caret (focused and in the visible blink phase)
    pub caret: bool,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    /// Visible text rows inside the box
    pub rows: u16,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            caret: false,
            error: None,
            placeholder: None,
            rows: 1,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn caret(mut self, caret: bool) -> Self {
        self.caret = caret;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }
}

/// Rows the field occupies: label, top border, text rows, bottom border,
/// and one more for an error.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    3 + config.rows + u16::from(config.error.is_some())
}

/// Row inside the returned lines where the box starts (for click targets).
pub const INPUT_BOX_OFFSET: usize = 1;

/// Render the field as lines `width` columns wide.
pub fn render_input_field(
    config: &InputFieldConfig,
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let width = width.max(6) as usize;
    let inner = width - 4;
    let mut lines = Vec::with_capacity(calculate_input_field_height(config) as usize);

    let label_style = if config.focused {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    lines.push(Line::from(Span::styled(config.label.to_string(), label_style)));

    let border = Style::default().fg(if config.focused {
        palette.primary
    } else {
        palette.border
    });
    lines.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        border,
    )));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let text_style = if showing_placeholder {
        Style::default().fg(palette.dim).bg(palette.input_bg)
    } else {
        Style::default().fg(palette.text).bg(palette.input_bg)
    };

    let mut rows: Vec<String> = if showing_placeholder {
        vec![config.placeholder.unwrap_or_default().to_string()]
    } else {
        wrap_text(config.value, inner.saturating_sub(1))
    };
    if config.caret {
        if let Some(last) = rows.last_mut() {
            if !showing_placeholder {
                last.push('█');
            } else {
                last.insert(0, '█');
            }
        }
    }
    // Keep the tail in view, like a terminal input
    let visible = config.rows as usize;
    if rows.len() > visible {
        rows.drain(..rows.len() - visible);
    }
    rows.resize(visible, String::new());

    for row in rows {
        let row = truncate(&row, inner);
        let pad = inner.saturating_sub(row.width());
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(format!("{}{}", row, " ".repeat(pad)), text_style),
            Span::styled(" │", border),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    )));

    if let Some(error) = config.error {
        lines.push(Line::from(vec![
            Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
        ]));
    }

    lines
}
