//! About: story, contact details, education, resume and fun facts.

use ratatui::style::{Modifier, Style};

use crate::models::{Education, PersonalInfo};
use crate::ui::interaction::ClickAction;

use super::{primary_button, Button, SectionBody, SectionContext};

/// Columns between the two halves on wide terminals
const COLUMN_GAP: u16 = 4;

pub(super) fn build(
    personal: &PersonalInfo,
    education: &[Education],
    ctx: &SectionContext<'_>,
) -> SectionBody {
    let mut body = SectionBody::new();
    body.section_title(
        "About Me",
        "Get to know the person behind the code and creativity",
        ctx.width,
        ctx.palette,
    );

    if ctx.layout.use_two_columns() {
        let column = ctx.width.saturating_sub(COLUMN_GAP) / 2;
        let left = story(personal, column, ctx);
        let right = details(personal, education, column, ctx);
        body.append(left.zip(right, column + COLUMN_GAP));
    } else {
        body.append(story(personal, ctx.width, ctx));
        body.blank();
        body.append(details(personal, education, ctx.width, ctx));
    }
    body
}

fn story(personal: &PersonalInfo, width: u16, ctx: &SectionContext<'_>) -> SectionBody {
    let palette = ctx.palette;
    let mut body = SectionBody::new();

    body.heading("Who I Am", palette);
    body.paragraph(&personal.bio, Style::default().fg(palette.text), width);
    body.blank();

    body.heading("Contact Information", palette);
    if !personal.email.is_empty() {
        body.field("Email", &personal.email, width, palette);
    }
    if !personal.phone.is_empty() {
        body.field("Phone", &personal.phone, width, palette);
    }
    if !personal.location.is_empty() {
        body.field("Location", &personal.location, width, palette);
    }
    body.blank();

    if !personal.fun_facts.is_empty() {
        body.heading("Fun Facts", palette);
        for fact in &personal.fun_facts {
            body.bullet(
                "• ",
                fact,
                Style::default().fg(palette.secondary),
                Style::default().fg(palette.text),
                width,
            );
        }
    }
    body
}

fn details(
    personal: &PersonalInfo,
    education: &[Education],
    width: u16,
    ctx: &SectionContext<'_>,
) -> SectionBody {
    let palette = ctx.palette;
    let text = Style::default().fg(palette.text);
    let mut body = SectionBody::new();

    if !education.is_empty() {
        body.heading("Education", palette);
        for entry in education {
            body.paragraph(&entry.degree, text.add_modifier(Modifier::BOLD), width);
            body.paragraph(&entry.institution, Style::default().fg(palette.secondary), width);
            let when = match &entry.gpa {
                Some(gpa) => format!("{} · GPA {}", entry.duration, gpa),
                None => entry.duration.clone(),
            };
            body.paragraph(&when, palette.muted(), width);
            if !entry.relevant_courses.is_empty() {
                body.field(
                    "Relevant Courses",
                    &entry.relevant_courses.join(", "),
                    width,
                    palette,
                );
            }
            body.blank();
        }
    }

    body.heading("Resume", palette);
    body.buttons(
        vec![Button::new(
            "Download Resume",
            primary_button(palette),
            ClickAction::DownloadResume,
        )],
        width,
    );
    if personal.resume_url.is_some() {
        body.paragraph("r opens the resume", palette.muted(), width);
    }
    body
}
