//! Section bodies.
//!
//! Each section renders to a [`SectionBody`]: a list of pre-wrapped lines
//! plus the click targets sitting on them. The frame renderer scrolls the
//! lines and turns the visible targets into hit areas.

mod about;
mod contact;
mod experience;
mod home;
mod projects;
mod skills;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::contact::ContactForm;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::text::wrap_with_prefix;
use crate::ui::theme::Palette;
use crate::view_state::ViewDescriptor;

/// A clickable span on one body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTarget {
    /// Index into [`SectionBody::lines`]
    pub line: usize,
    /// Column offset from the body's left edge
    pub x: u16,
    pub width: u16,
    pub action: ClickAction,
}

/// Everything the renderer needs for one section body.
#[derive(Debug, Default)]
pub struct SectionBody {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<LineTarget>,
}

/// Button to place on a line.
pub struct Button {
    pub label: String,
    pub style: Style,
    pub action: ClickAction,
}

impl Button {
    pub fn new(label: impl Into<String>, style: Style, action: ClickAction) -> Self {
        Self {
            label: label.into(),
            style,
            action,
        }
    }
}

impl SectionBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn heading(&mut self, text: &str, palette: &Palette) {
        self.push(Line::from(Span::styled(text.to_string(), palette.heading())));
    }

    /// Heading with a rule underneath.
    pub fn section_title(&mut self, text: &str, subtitle: &str, width: u16, palette: &Palette) {
        self.push(Line::from(Span::styled(
            text.to_string(),
            palette.heading().add_modifier(Modifier::UNDERLINED),
        )));
        if !subtitle.is_empty() {
            self.paragraph(subtitle, palette.muted(), width);
        }
        self.blank();
    }

    /// Word-wrapped text.
    pub fn paragraph(&mut self, text: &str, style: Style, width: u16) {
        self.extend(wrap_with_prefix(text, "", style, style, width as usize));
    }

    /// Word-wrapped text with a bullet-like prefix.
    pub fn bullet(&mut self, prefix: &str, text: &str, prefix_style: Style, style: Style, width: u16) {
        self.extend(wrap_with_prefix(text, prefix, prefix_style, style, width as usize));
    }

    /// `label: value`, wrapped under the label.
    pub fn field(&mut self, label: &str, value: &str, width: u16, palette: &Palette) {
        self.bullet(
            &format!("{}: ", label),
            value,
            palette.muted(),
            Style::default().fg(palette.text),
            width,
        );
    }

    /// Line that is itself one click target, starting `indent` columns in.
    pub fn clickable(&mut self, indent: u16, spans: Vec<Span<'static>>, action: ClickAction) {
        let width: u16 = spans.iter().map(|s| s.content.width() as u16).sum();
        let mut all = Vec::with_capacity(spans.len() + 1);
        if indent > 0 {
            all.push(Span::raw(" ".repeat(indent as usize)));
        }
        all.extend(spans);
        self.targets.push(LineTarget {
            line: self.lines.len(),
            x: indent,
            width,
            action,
        });
        self.push(Line::from(all));
    }

    /// A row of `[ label ]` buttons separated by two spaces. Wraps onto a
    /// new row when the next button would overflow `width`.
    pub fn buttons(&mut self, buttons: Vec<Button>, width: u16) {
        self.indented_buttons(0, buttons, width);
    }

    /// [`buttons`](Self::buttons) starting `indent` columns in.
    pub fn indented_buttons(&mut self, indent: u16, buttons: Vec<Button>, width: u16) {
        let lead = " ".repeat(indent as usize);
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut x: u16 = indent;

        for button in buttons {
            let text = format!("[ {} ]", button.label);
            let w = text.width() as u16;
            if x > indent && x + 2 + w > width {
                self.push(Line::from(std::mem::take(&mut spans)));
                x = indent;
            }
            if x == indent && indent > 0 {
                spans.push(Span::raw(lead.clone()));
            }
            if x > indent {
                spans.push(Span::raw("  "));
                x += 2;
            }
            self.targets.push(LineTarget {
                line: self.lines.len(),
                x,
                width: w,
                action: button.action,
            });
            spans.push(Span::styled(text, button.style));
            x += w;
        }

        if !spans.is_empty() {
            self.push(Line::from(spans));
        }
    }

    /// Append another body below this one, shifting its targets.
    pub fn append(&mut self, other: SectionBody) {
        let base = self.lines.len();
        self.targets
            .extend(other.targets.into_iter().map(|t| LineTarget {
                line: t.line + base,
                ..t
            }));
        self.lines.extend(other.lines);
    }

    /// Place `right` beside `self` starting at column `offset`. Used for
    /// two-column layouts on wide terminals.
    pub fn zip(mut self, right: SectionBody, offset: u16) -> SectionBody {
        let rows = self.lines.len().max(right.lines.len());
        self.lines.resize(rows, Line::default());

        for (idx, line) in right.lines.into_iter().enumerate() {
            let left = &mut self.lines[idx];
            let pad = (offset as usize).saturating_sub(left.width());
            left.spans.push(Span::raw(" ".repeat(pad)));
            left.spans.extend(line.spans);
        }
        self.targets
            .extend(right.targets.into_iter().map(|t| LineTarget {
                x: t.x + offset,
                ..t
            }));
        self
    }
}

/// Inputs to section rendering beyond the resolved view.
pub struct SectionContext<'a> {
    /// Body width in columns
    pub width: u16,
    pub layout: LayoutContext,
    pub palette: &'a Palette,
    /// Project card targeted by keyboard actions
    pub project_index: usize,
    pub contact: &'a ContactForm,
    pub contact_editing: bool,
    /// Caret is in the visible blink phase
    pub caret_visible: bool,
}

/// Style for primary buttons.
pub fn primary_button(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.background)
        .bg(palette.primary)
        .add_modifier(Modifier::BOLD)
}

/// Style for outline buttons.
pub fn outline_button(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD)
}

/// Build the body for a resolved view.
pub fn build_section_body(view: &ViewDescriptor<'_>, ctx: &SectionContext<'_>) -> SectionBody {
    match *view {
        ViewDescriptor::Home { personal } => home::build(personal, ctx),
        ViewDescriptor::About {
            personal,
            education,
        } => about::build(personal, education, ctx),
        ViewDescriptor::Skills { skills } => skills::build(skills, ctx),
        ViewDescriptor::Experience {
            experience,
            certifications,
        } => experience::build(experience, certifications, ctx),
        ViewDescriptor::Projects { projects } => projects::build(projects, ctx),
        ViewDescriptor::Contact { personal } => contact::build(personal, ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::ui::theme::Theme;

    pub fn context(form: &ContactForm, width: u16) -> SectionContext<'_> {
        SectionContext {
            width,
            layout: LayoutContext::new(width + 4, 30),
            palette: Theme::Dark.palette(),
            project_index: 0,
            contact: form,
            contact_editing: false,
            caret_visible: false,
        }
    }

    pub fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    pub fn body_text(body: &SectionBody) -> String {
        body.lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text covered by a target.
    pub fn target_text(body: &SectionBody, target: &LineTarget) -> String {
        line_text(&body.lines[target.line])
            .chars()
            .skip(target.x as usize)
            .take(target.width as usize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::{ContentDocument, SectionId};
    use crate::ui::theme::Theme;
    use crate::view_state::resolve;

    #[test]
    fn test_buttons_wrap_and_track_columns() {
        let palette = Theme::Dark.palette();
        let mut body = SectionBody::new();
        body.buttons(
            vec![
                Button::new("One", palette.base(), ClickAction::DownloadResume),
                Button::new("Two", palette.base(), ClickAction::SubmitContact),
                Button::new("Three", palette.base(), ClickAction::FocusProject(0)),
            ],
            20,
        );
        assert_eq!(body.len(), 2);
        assert_eq!(target_text(&body, &body.targets[0]), "[ One ]");
        assert_eq!(target_text(&body, &body.targets[1]), "[ Two ]");
        assert_eq!(body.targets[1].x, 9);
        assert_eq!(body.targets[2].line, 1);
        assert_eq!(body.targets[2].x, 0);
    }

    #[test]
    fn test_append_shifts_target_lines() {
        let mut top = SectionBody::new();
        top.blank();
        let mut bottom = SectionBody::new();
        bottom.clickable(2, vec![Span::raw("go")], ClickAction::DownloadResume);
        top.append(bottom);
        assert_eq!(top.targets[0].line, 1);
        assert_eq!(top.targets[0].x, 2);
        assert_eq!(target_text(&top, &top.targets[0]), "go");
    }

    #[test]
    fn test_zip_offsets_right_column() {
        let mut left = SectionBody::new();
        left.push(Line::from("abc"));
        let mut right = SectionBody::new();
        right.push(Line::from("x"));
        right.clickable(0, vec![Span::raw("link")], ClickAction::DownloadResume);
        let body = left.zip(right, 10);
        assert_eq!(body.len(), 2);
        assert_eq!(line_text(&body.lines[0]), "abc       x");
        assert_eq!(body.targets[0].x, 10);
        assert_eq!(target_text(&body, &body.targets[0]), "link");
    }

    #[test]
    fn test_every_section_builds_and_fits_width() {
        let content = ContentDocument::bundled().unwrap();
        let form = ContactForm::new();
        for width in [40u16, 76, 100] {
            let ctx = context(&form, width);
            for section in SectionId::ALL {
                let body = build_section_body(&resolve(section, &content), &ctx);
                assert!(!body.is_empty(), "{} is empty", section);
                for target in &body.targets {
                    assert!(target.line < body.len());
                    assert!(target.width > 0);
                }
                for line in &body.lines {
                    assert!(
                        line.width() <= width as usize,
                        "{} at {}: {:?}",
                        section,
                        width,
                        line_text(line)
                    );
                }
            }
        }
    }
}
