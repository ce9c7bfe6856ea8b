//! Skills: one card per category with a level gauge.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::models::SkillCategory;
use crate::ui::text::truncate;
use crate::ui::theme::Palette;

use super::{SectionBody, SectionContext};

const COLUMN_GAP: u16 = 4;

pub(super) fn build(skills: &[SkillCategory], ctx: &SectionContext<'_>) -> SectionBody {
    let mut body = SectionBody::new();
    body.section_title(
        "Skills & Expertise",
        "Technologies and tools I work with",
        ctx.width,
        ctx.palette,
    );

    if skills.is_empty() {
        body.paragraph("No skills listed yet.", ctx.palette.muted(), ctx.width);
        return body;
    }

    if ctx.layout.use_two_columns() {
        let column = ctx.width.saturating_sub(COLUMN_GAP) / 2;
        for pair in skills.chunks(2) {
            let left = card(&pair[0], column, ctx.palette);
            let row = match pair.get(1) {
                Some(right) => left.zip(card(right, column, ctx.palette), column + COLUMN_GAP),
                None => left,
            };
            body.append(row);
            body.blank();
        }
    } else {
        for skill in skills {
            body.append(card(skill, ctx.width, ctx.palette));
            body.blank();
        }
    }
    body
}

fn card(skill: &SkillCategory, width: u16, palette: &Palette) -> SectionBody {
    let width = width.max(8);
    let mut body = SectionBody::new();
    let accent = if skill.is_highlighted() {
        palette.primary
    } else {
        palette.secondary
    };

    let percent = format!("{}%", skill.level);
    let name = truncate(
        &skill.category,
        (width as usize).saturating_sub(percent.width() + 1),
    );
    let pad = (width as usize).saturating_sub(name.width() + percent.width());
    body.push(Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(percent, Style::default().fg(accent)),
    ]));

    body.push(gauge(skill.level, width, accent, palette));

    if !skill.items.is_empty() {
        body.paragraph(
            &skill.items.join(" · "),
            Style::default().fg(palette.text),
            width,
        );
    }

    let stars = skill.stars() as usize;
    body.push(Line::from(vec![
        Span::styled("Skill Level: ", palette.muted()),
        Span::styled("★".repeat(stars), Style::default().fg(accent)),
        Span::styled("☆".repeat(5 - stars), palette.muted()),
        Span::raw("  "),
        Span::styled(skill.tier().label(), Style::default().fg(accent)),
    ]));
    body
}

/// Text progress bar `width` columns wide.
fn gauge(level: u8, width: u16, accent: ratatui::style::Color, palette: &Palette) -> Line<'static> {
    let width = width as usize;
    let filled = (width * level.min(100) as usize) / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(accent)),
        Span::styled("░".repeat(width - filled), Style::default().fg(palette.border)),
    ])
}
