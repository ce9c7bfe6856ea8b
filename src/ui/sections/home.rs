//! Home: introduction, call-to-action buttons and social links.

use ratatui::style::{Modifier, Style};

use crate::models::{PersonalInfo, SectionId};
use crate::ui::interaction::ClickAction;

use super::{outline_button, primary_button, Button, SectionBody, SectionContext};

pub(super) fn build(personal: &PersonalInfo, ctx: &SectionContext<'_>) -> SectionBody {
    let palette = ctx.palette;
    let width = ctx.width;
    let mut body = SectionBody::new();

    if !ctx.layout.is_short() {
        body.blank();
    }
    body.paragraph(&personal.name, palette.heading(), width);
    body.paragraph(
        &personal.title,
        Style::default()
            .fg(palette.secondary)
            .add_modifier(Modifier::BOLD),
        width,
    );
    if !personal.tagline.is_empty() {
        body.paragraph(
            &personal.tagline,
            palette.muted().add_modifier(Modifier::ITALIC),
            width,
        );
    }
    body.blank();

    if !personal.bio.is_empty() {
        body.paragraph(&personal.bio, Style::default().fg(palette.text), width);
        body.blank();
    }

    body.buttons(
        vec![
            Button::new(
                "View My Work",
                primary_button(palette),
                ClickAction::CallToAction(SectionId::Projects),
            ),
            Button::new(
                "Get In Touch",
                outline_button(palette),
                ClickAction::CallToAction(SectionId::Contact),
            ),
        ],
        width,
    );
    body.blank();

    let mut socials: Vec<Button> = personal
        .social
        .iter()
        .map(|(label, url)| Button::new(label, palette.link(), ClickAction::OpenLink(url.to_string())))
        .collect();
    socials.push(Button::new(
        "Email",
        palette.link(),
        ClickAction::CallToAction(SectionId::Contact),
    ));
    body.buttons(socials, width);
    body.blank();

    body.paragraph("w view my work · g get in touch · → explore", palette.muted(), width);
    body
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::contact::ContactForm;
    use crate::models::ContentDocument;

    #[test]
    fn test_home_shows_identity_and_ctas() {
        let content = ContentDocument::bundled().unwrap();
        let form = ContactForm::new();
        let body = build(&content.personal, &context(&form, 80));
        let text = body_text(&body);

        assert!(text.contains(&content.personal.name));
        assert!(text.contains(&content.personal.title));

        let ctas: Vec<_> = body
            .targets
            .iter()
            .filter(|t| matches!(t.action, ClickAction::CallToAction(_)))
            .map(|t| (target_text(&body, t), t.action.clone()))
            .collect();
        assert_eq!(
            ctas[0],
            (
                "[ View My Work ]".to_string(),
                ClickAction::CallToAction(SectionId::Projects)
            )
        );
        assert_eq!(
            ctas[1],
            (
                "[ Get In Touch ]".to_string(),
                ClickAction::CallToAction(SectionId::Contact)
            )
        );
    }

    #[test]
    fn test_home_links_only_configured_socials() {
        let content = ContentDocument::bundled().unwrap();
        let form = ContactForm::new();
        let body = build(&content.personal, &context(&form, 80));
        let links: Vec<String> = body
            .targets
            .iter()
            .filter_map(|t| match &t.action {
                ClickAction::OpenLink(url) => Some(url.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            links,
            vec![
                "https://github.com/alexmorgan".to_string(),
                "https://www.linkedin.com/in/alexmorgan".to_string(),
            ]
        );
    }
}
