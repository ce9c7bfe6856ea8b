//! Experience: work timeline and certifications.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::models::{Certification, Experience};
use crate::ui::text::wrap_text;
use crate::ui::theme::Palette;

use super::{SectionBody, SectionContext};

pub(super) fn build(
    experience: &[Experience],
    certifications: &[Certification],
    ctx: &SectionContext<'_>,
) -> SectionBody {
    let palette = ctx.palette;
    let width = ctx.width;
    let mut body = SectionBody::new();
    body.section_title(
        "Experience",
        "My professional journey and key achievements in the tech industry",
        width,
        palette,
    );

    body.heading("Professional Experience", palette);
    body.blank();
    let last = experience.len().saturating_sub(1);
    for (idx, job) in experience.iter().enumerate() {
        timeline_entry(&mut body, job, idx == last, width, palette);
    }
    if experience.is_empty() {
        body.paragraph("No positions listed yet.", palette.muted(), width);
    }

    if !certifications.is_empty() {
        body.blank();
        body.heading("Certifications", palette);
        body.blank();
        for cert in certifications {
            body.bullet(
                "✓ ",
                &cert.name,
                Style::default().fg(palette.primary),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
                width,
            );
            body.bullet(
                "  ",
                &format!("{} · {}", cert.issuer, cert.date),
                palette.muted(),
                Style::default().fg(palette.secondary),
                width,
            );
            if let Some(id) = &cert.credential_id {
                body.bullet(
                    "  ",
                    &format!("Credential ID: {}", id),
                    palette.muted(),
                    palette.muted(),
                    width,
                );
            }
            body.blank();
        }
    }
    body
}

fn timeline_entry(
    body: &mut SectionBody,
    job: &Experience,
    is_last: bool,
    width: u16,
    palette: &Palette,
) {
    let rail = Style::default().fg(palette.border);
    let text = Style::default().fg(palette.text);

    rail_text(
        body,
        "● ",
        "│ ",
        &job.position,
        Style::default().fg(palette.primary),
        text.add_modifier(Modifier::BOLD),
        width,
    );
    rail_text(
        body,
        "│ ",
        "│ ",
        &format!("{} · {}", job.company, job.duration),
        rail,
        Style::default().fg(palette.secondary),
        width,
    );
    if !job.description.is_empty() {
        rail_text(body, "│ ", "│ ", &job.description, rail, text, width);
    }
    if !job.achievements.is_empty() {
        rail_text(body, "│ ", "│ ", "Key Achievements", rail, palette.muted(), width);
        for achievement in &job.achievements {
            rail_text(body, "│   ▸ ", "│     ", achievement, rail, text, width);
        }
    }
    if !is_last {
        body.push(Line::from(Span::styled("│", rail)));
    }
}

/// Wrapped text hanging off the timeline rail. The first row uses `lead`,
/// continuation rows use `cont` so the rail stays unbroken.
fn rail_text(
    body: &mut SectionBody,
    lead: &str,
    cont: &str,
    text: &str,
    rail_style: Style,
    text_style: Style,
    width: u16,
) {
    let indent = lead.width();
    for (idx, chunk) in wrap_text(text, (width as usize).saturating_sub(indent))
        .into_iter()
        .enumerate()
    {
        let prefix = if idx == 0 { lead } else { cont };
        body.push(Line::from(vec![
            Span::styled(prefix.to_string(), rail_style),
            Span::styled(chunk, text_style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::contact::ContactForm;
    use crate::models::ContentDocument;

    #[test]
    fn test_timeline_lists_jobs_and_achievements() {
        let content = ContentDocument::bundled().unwrap();
        let form = ContactForm::new();
        let body = build(&content.experience, &content.certifications, &context(&form, 70));
        let text = body_text(&body);

        assert!(text.contains("● Senior Frontend Engineer"));
        assert!(text.contains("Brightline Labs · 2022 - Present"));
        assert!(text.contains("▸ Mentored three junior developers"));
        assert!(text.contains("Key Achievements"));
    }

    #[test]
    fn test_certifications_show_credential_when_present() {
        let content = ContentDocument::bundled().unwrap();
        let form = ContactForm::new();
        let body = build(&content.experience, &content.certifications, &context(&form, 70));
        let text = body_text(&body);

        assert!(text.contains("✓ AWS Certified Developer - Associate"));
        assert!(text.contains("Credential ID: AWS-DEV-20231"));
        assert_eq!(text.matches("Credential ID").count(), 1);
    }

    #[test]
    fn test_wrapped_rows_keep_the_rail() {
        let mut body = SectionBody::new();
        rail_text(
            &mut body,
            "│   ▸ ",
            "│     ",
            "a long achievement that has to wrap",
            Style::default(),
            Style::default(),
            16,
        );
        assert!(body.len() > 1);
        assert!(body.lines.iter().all(|l| line_text(l).starts_with('│')));
    }
}
