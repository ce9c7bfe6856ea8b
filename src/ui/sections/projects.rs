//! Projects: one card per project with a feature preview and links.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::models::{Project, SectionId};
use crate::ui::interaction::ClickAction;

use super::{outline_button, primary_button, Button, SectionBody, SectionContext};

const INDENT: &str = "   ";

pub(super) fn build(projects: &[Project], ctx: &SectionContext<'_>) -> SectionBody {
    let palette = ctx.palette;
    let width = ctx.width;
    let mut body = SectionBody::new();
    body.section_title(
        "Featured Projects",
        "A selection of things I have designed and built",
        width,
        palette,
    );

    if projects.is_empty() {
        body.paragraph("No projects listed yet.", palette.muted(), width);
    }

    for (idx, project) in projects.iter().enumerate() {
        card(&mut body, idx, project, idx == ctx.project_index, ctx);
        body.blank();
    }

    body.paragraph("Interested in working together?", palette.muted(), width);
    body.buttons(
        vec![Button::new(
            "Get In Touch",
            primary_button(palette),
            ClickAction::CallToAction(SectionId::Contact),
        )],
        width,
    );
    body
}

fn card(
    body: &mut SectionBody,
    idx: usize,
    project: &Project,
    focused: bool,
    ctx: &SectionContext<'_>,
) {
    let palette = ctx.palette;
    let width = ctx.width;
    let text = Style::default().fg(palette.text);
    let accent = Style::default().fg(palette.secondary);

    let (marker, title_style) = if focused {
        (
            "▶ ",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", text.add_modifier(Modifier::BOLD))
    };
    body.clickable(
        0,
        vec![
            Span::styled(marker, Style::default().fg(palette.primary)),
            Span::styled(format!("{}. {}", idx + 1, project.title), title_style),
        ],
        ClickAction::FocusProject(idx),
    );

    body.bullet(INDENT, &project.description, text, text, width);

    if !project.technologies.is_empty() {
        body.bullet(
            INDENT,
            &format!("Technologies Used: {}", project.technologies.join(" · ")),
            text,
            accent,
            width,
        );
    }

    if !project.features.is_empty() {
        body.bullet(INDENT, "Key Features", text, palette.muted(), width);
        for feature in project.feature_preview() {
            body.bullet(
                &format!("{}• ", INDENT),
                feature,
                accent,
                text,
                width,
            );
        }
        let hidden = project.hidden_feature_count();
        if hidden > 0 {
            body.bullet(
                &format!("{}  ", INDENT),
                &format!("+{} more features", hidden),
                text,
                palette.muted(),
                width,
            );
        }
    }

    let mut links = Vec::new();
    if let Some(demo) = &project.demo_url {
        links.push(Button::new(
            "Live Demo",
            primary_button(palette),
            ClickAction::OpenLink(demo.clone()),
        ));
    }
    if let Some(repo) = &project.github_url {
        links.push(Button::new(
            "View Project",
            outline_button(palette),
            ClickAction::OpenLink(repo.clone()),
        ));
    }
    if !links.is_empty() {
        body.indented_buttons(INDENT.len() as u16, links, width);
    }
}
