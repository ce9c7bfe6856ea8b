//! Word wrapping for pre-wrapped section bodies.
//!
//! Section bodies are laid out line by line so click targets keep stable
//! row indices; ratatui's own `Wrap` would reflow them.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap by display width. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-split an overlong word
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if current_width + w > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }
        lines.push(current);
    }

    lines
}

/// Wrap `text` and prefix every resulting line (continuations get spaces of
/// the same width).
pub fn wrap_with_prefix(
    text: &str,
    prefix: &str,
    prefix_style: Style,
    text_style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let prefix_width = prefix.width();
    let indent = " ".repeat(prefix_width);
    wrap_text(text, width.saturating_sub(prefix_width))
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let lead = if i == 0 {
                prefix.to_string()
            } else {
                indent.clone()
            };
            Line::from(vec![
                Span::styled(lead, prefix_style),
                Span::styled(chunk, text_style),
            ])
        })
        .collect()
}

/// Truncate to `max` display columns, ending with `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
