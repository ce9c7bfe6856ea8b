//! Navigation bar and key-hint footer.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::{SectionId, SECTION_REGISTRY};

use super::components::{render_tab_selector, tab_strip_width};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::Palette;

/// Rows used by the navigation bar (tabs plus rule)
pub const NAV_HEIGHT: u16 = 2;

/// Render the tab strip and register one hit area per tab.
pub fn render_nav(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height == 0 {
        return;
    }
    let palette = app.theme.palette();
    let active = app.active_section();

    let mut show_labels = ctx.show_nav_labels();
    if show_labels && tab_strip_width(&SECTION_REGISTRY, true) > area.width {
        show_labels = false;
    }
    let (line, tabs) = render_tab_selector(&SECTION_REGISTRY, active.index(), show_labels, palette);

    let strip = line.width() as u16;
    let x = area.x + area.width.saturating_sub(strip) / 2;
    let row = Rect::new(x, area.y, strip.min(area.width), 1);
    frame.render_widget(Paragraph::new(line), row);

    for (entry, tab) in SECTION_REGISTRY.iter().zip(tabs) {
        let left = x + tab.x;
        if left >= area.right() {
            break;
        }
        let width = tab.width.min(area.right() - left);
        app.hit_registry.register(
            Rect::new(left, area.y, width, 1),
            ClickAction::SelectSection(entry.id),
            Some(hover_style(palette)),
        );
    }

    if area.height > 1 {
        let rule = Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(palette.border),
        ));
        frame.render_widget(
            Paragraph::new(rule),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }
}

/// Style applied to a hovered hit area.
pub fn hover_style(palette: &Palette) -> Style {
    Style::default().fg(palette.background).bg(palette.secondary)
}

/// Key hints for the current mode.
pub fn build_keybind_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.contact_editing {
        return vec![
            ("Tab", "next field"),
            ("Ctrl+S", "send"),
            ("Esc", "done"),
        ];
    }

    let mut hints = vec![("←/→", "sections"), ("↑/↓", "scroll")];
    match app.active_section() {
        SectionId::Home => {
            hints.push(("w", "work"));
            hints.push(("g", "contact"));
        }
        SectionId::About => hints.push(("r", "resume")),
        SectionId::Projects => {
            hints.push(("j/k", "select"));
            hints.push(("o", "open"));
        }
        SectionId::Contact => hints.push(("Enter", "write")),
        SectionId::Skills | SectionId::Experience => {}
    }
    hints.push(("t", "theme"));
    hints.push(("q", "quit"));
    hints
}

/// Footer line with key hints, dropping hints that do not fit.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let palette = app.theme.palette();
    let mut spans = Vec::new();
    let mut used = 0usize;

    for (key, action) in build_keybind_hints(app) {
        let width = key.chars().count() + action.chars().count() + 3;
        if used + width > area.width as usize {
            break;
        }
        spans.push(Span::styled(key, palette.heading()));
        spans.push(Span::styled(format!(" {}  ", action), palette.muted()));
        used += width;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
