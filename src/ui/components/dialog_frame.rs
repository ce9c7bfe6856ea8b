//! Framed box with rounded borders, used for the loading card and toasts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::Palette;

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title in the top border; empty for none
    pub title: &'a str,
    /// Border color override
    pub accent: Option<ratatui::style::Color>,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            accent: None,
        }
    }

    pub fn accent(mut self, color: ratatui::style::Color) -> Self {
        self.accent = Some(color);
        self
    }
}

/// Clear `area`, draw the frame and return the inner rect.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    config: &DialogFrameConfig,
    palette: &Palette,
) -> Rect {
    frame.render_widget(Clear, area);

    let border = config.accent.unwrap_or(palette.border);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(palette.base());
    if !config.title.is_empty() {
        block = block.title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Outer height for `content_height` rows of content.
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}
