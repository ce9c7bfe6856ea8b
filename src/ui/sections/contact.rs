//! Contact: details, social links and the message form.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::contact::ContactField;
use crate::models::PersonalInfo;
use crate::ui::components::{render_input_field, InputFieldConfig, INPUT_BOX_OFFSET};
use crate::ui::interaction::ClickAction;
use crate::ui::theme::COLOR_SUCCESS;

use super::{outline_button, primary_button, Button, LineTarget, SectionBody, SectionContext};

const COLUMN_GAP: u16 = 4;

/// Visible rows of the message box
const MESSAGE_ROWS: u16 = 4;

pub(super) fn build(personal: &PersonalInfo, ctx: &SectionContext<'_>) -> SectionBody {
    let mut body = SectionBody::new();
    body.section_title(
        "Get In Touch",
        "Have a project in mind or just want to say hello? Send me a message.",
        ctx.width,
        ctx.palette,
    );

    if ctx.layout.use_two_columns() {
        let column = ctx.width.saturating_sub(COLUMN_GAP) / 2;
        let left = details(personal, column, ctx);
        let right = form(column, ctx);
        body.append(left.zip(right, column + COLUMN_GAP));
    } else {
        body.append(details(personal, ctx.width, ctx));
        body.blank();
        body.append(form(ctx.width, ctx));
    }
    body
}

fn details(personal: &PersonalInfo, width: u16, ctx: &SectionContext<'_>) -> SectionBody {
    let palette = ctx.palette;
    let mut body = SectionBody::new();

    if !personal.email.is_empty() {
        body.push(Span::styled("Email", palette.muted()));
        body.clickable(
            0,
            vec![Span::styled(format!("✉ {}", personal.email), palette.link())],
            ClickAction::OpenLink(format!("mailto:{}", personal.email)),
        );
    }
    if !personal.phone.is_empty() {
        body.field("Phone", &personal.phone, width, palette);
    }
    if !personal.location.is_empty() {
        body.field("Location", &personal.location, width, palette);
    }
    body.blank();

    let socials: Vec<Button> = personal
        .social
        .iter()
        .map(|(label, url)| Button::new(label, outline_button(palette), ClickAction::OpenLink(url.to_string())))
        .collect();
    if !socials.is_empty() {
        body.heading("Follow Me", palette);
        body.buttons(socials, width);
    }
    body
}

fn form(width: u16, ctx: &SectionContext<'_>) -> SectionBody {
    let palette = ctx.palette;
    let form = ctx.contact;
    let mut body = SectionBody::new();

    body.heading("Send a Message", palette);
    if let Some(notice) = &form.success_notice {
        body.bullet(
            "✓ ",
            notice,
            Style::default().fg(COLOR_SUCCESS),
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
            width,
        );
    }
    if !ctx.contact_editing {
        body.paragraph("Press Enter or click a field to start typing", palette.muted(), width);
    }
    body.blank();

    let error_field = form.error.map(|e| e.field());
    let error_text = form.error.map(|e| e.to_string());

    for field in ContactField::ALL.into_iter().filter(ContactField::is_text) {
        let focused = ctx.contact_editing && form.focus == field;
        let rows = if field == ContactField::Message {
            MESSAGE_ROWS
        } else {
            1
        };
        let error = if error_field == Some(field) {
            error_text.as_deref()
        } else {
            None
        };
        let config = InputFieldConfig::new(field.label(), form.value(field))
            .placeholder(field.placeholder())
            .focused(focused)
            .caret(focused && ctx.caret_visible)
            .error(error)
            .rows(rows);

        let start = body.len();
        body.extend(render_input_field(&config, width, palette));
        // The whole box is the click target
        for row in 0..rows as usize + 2 {
            body.targets.push(LineTarget {
                line: start + INPUT_BOX_OFFSET + row,
                x: 0,
                width,
                action: ClickAction::FocusField(field),
            });
        }
    }
    body.blank();

    let submit_focused = ctx.contact_editing && form.focus == ContactField::Submit;
    let style = if form.loading {
        palette.muted().add_modifier(Modifier::BOLD)
    } else if submit_focused {
        primary_button(palette).add_modifier(Modifier::UNDERLINED)
    } else {
        primary_button(palette)
    };
    let label = if submit_focused && !form.loading {
        format!("▶ {}", form.submit_label())
    } else {
        form.submit_label().to_string()
    };
    body.buttons(vec![Button::new(label, style, ClickAction::SubmitContact)], width);

    if ctx.contact_editing {
        body.paragraph("Tab next field · Ctrl+S send · Esc done", palette.muted(), width);
    }
    body
}
