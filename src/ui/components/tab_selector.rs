//! Navigation tab strip.
//!
//! One tab per registry entry: icon plus label, icon only on narrow
//! terminals. The active tab is bracketed by `▶` and drawn in the primary
//! accent.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::models::SectionEntry;
use crate::ui::theme::Palette;

/// Column span of one rendered tab, relative to the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpan {
    pub x: u16,
    pub width: u16,
}

fn tab_text(entry: &SectionEntry, show_label: bool) -> String {
    if show_label {
        format!("{} {}", entry.icon, entry.label)
    } else {
        entry.icon.to_string()
    }
}

/// Build the tab strip and the column span of each tab (for click targets).
///
/// ```ignore
/// let (line, spans) = render_tab_selector(&SECTION_REGISTRY, 2, true, palette);
/// ```
pub fn render_tab_selector(
    entries: &[SectionEntry],
    selected: usize,
    show_labels: bool,
    palette: &Palette,
) -> (Line<'static>, Vec<TabSpan>) {
    let gap = if show_labels { "  " } else { " " };
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut tabs = Vec::with_capacity(entries.len());
    let mut x: u16 = 0;

    for (idx, entry) in entries.iter().enumerate() {
        let is_selected = idx == selected;
        let text = tab_text(entry, show_labels);
        // Marker + text + trailing pad, so every tab has the same chrome
        let rendered = if is_selected {
            format!("▶ {} ", text)
        } else {
            format!("  {} ", text)
        };
        let style = if is_selected {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };

        let width = rendered.width() as u16;
        tabs.push(TabSpan { x, width });
        spans.push(Span::styled(rendered, style));
        x += width;

        if idx + 1 < entries.len() {
            spans.push(Span::raw(gap));
            x += gap.width() as u16;
        }
    }

    (Line::from(spans), tabs)
}

/// Width of the full strip.
pub fn tab_strip_width(entries: &[SectionEntry], show_labels: bool) -> u16 {
    let gap: u16 = if show_labels { 2 } else { 1 };
    let tabs: u16 = entries
        .iter()
        .map(|e| tab_text(e, show_labels).width() as u16 + 3)
        .sum();
    tabs + gap * entries.len().saturating_sub(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SECTION_REGISTRY;
    use crate::ui::theme::Theme;

    #[test]
    fn test_spans_are_contiguous_with_gaps() {
        let (line, tabs) = render_tab_selector(&SECTION_REGISTRY, 0, true, Theme::Dark.palette());
        assert_eq!(tabs.len(), 6);
        for pair in tabs.windows(2) {
            assert_eq!(pair[0].x + pair[0].width + 2, pair[1].x);
        }
        let last = tabs[5];
        assert_eq!(last.x + last.width, line.width() as u16);
        assert_eq!(line.width() as u16, tab_strip_width(&SECTION_REGISTRY, true));
    }

    #[test]
    fn test_selected_tab_is_marked() {
        let (line, _) = render_tab_selector(&SECTION_REGISTRY, 2, true, Theme::Dark.palette());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("▶ </> Skills"));
        assert!(!text.contains("▶ ⌂"));
    }

    #[test]
    fn test_icons_only_when_narrow() {
        let (line, _) = render_tab_selector(&SECTION_REGISTRY, 0, false, Theme::Dark.palette());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains("Home"));
        assert!(text.contains('✉'));
        assert_eq!(line.width() as u16, tab_strip_width(&SECTION_REGISTRY, false));
    }
}
