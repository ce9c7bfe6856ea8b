//! Loading screen shown while the loading gate is up.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    calculate_total_dialog_height, render_dialog_frame, render_status_indicator,
    DialogFrameConfig, StatusIndicatorType,
};
use super::layout::centered_rect;
use super::theme::Palette;

pub const LOADING_TITLE: &str = "Getting Things Ready...";
pub const LOADING_SUBTITLE: &str = "Your journey through my work is about to begin";

/// Dots that fill in over time under the subtitle.
const PROGRESS_DOTS: usize = 5;

/// Build the card contents for a tick.
pub fn build_loading_lines(tick: u64, palette: &Palette) -> Vec<Line<'static>> {
    let spinner = render_status_indicator(&StatusIndicatorType::spinner(LOADING_TITLE, tick), palette);
    let lit = ((tick / 12) as usize % (PROGRESS_DOTS + 1)).min(PROGRESS_DOTS);

    vec![
        Line::default(),
        spinner,
        Line::default(),
        Line::from(Span::styled(
            LOADING_SUBTITLE,
            palette.muted().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("● ".repeat(lit), Style::default().fg(palette.primary)),
            Span::styled("○ ".repeat(PROGRESS_DOTS - lit), Style::default().fg(palette.border)),
        ]),
    ]
}

pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64, palette: &Palette) {
    let lines = build_loading_lines(tick, palette);
    let height = calculate_total_dialog_height(lines.len() as u16 + 1);
    let width = (LOADING_SUBTITLE.len() as u16 + 8).min(area.width);

    let card = centered_rect(area, width, height);
    let inner = render_dialog_frame(frame, card, &DialogFrameConfig::new(""), palette);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_loading_copy() {
        let lines = build_loading_lines(0, Theme::Dark.palette());
        let all = text(&lines);
        assert!(all.contains(LOADING_TITLE));
        assert!(all.contains(LOADING_SUBTITLE));
    }

    #[test]
    fn test_spinner_advances() {
        let palette = Theme::Dark.palette();
        let a = build_loading_lines(0, palette);
        let b = build_loading_lines(6, palette);
        assert_ne!(a[1].spans[0].content, b[1].spans[0].content);
    }
}
