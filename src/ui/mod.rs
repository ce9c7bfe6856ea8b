//! Terminal rendering for the portfolio.
//!
//! Each frame is drawn back to front:
//! - backdrop (starfield and the section label)
//! - loading card while the gate is up, otherwise nav bar, section body and footer
//! - toasts
//!
//! Section bodies are pre-wrapped line lists (see [`sections`]) so the
//! renderer can scroll them and register the visible click targets as hit
//! areas for the next mouse event.

pub mod components;
pub mod interaction;
pub mod layout;
mod loading;
mod nav;
pub mod sections;
pub mod text;
pub mod theme;
mod toasts;

pub use interaction::{ClickAction, HitArea, HitAreaRegistry};
pub use layout::{breakpoints, centered_rect, LayoutContext, SizeCategory};
pub use loading::{build_loading_lines, LOADING_SUBTITLE, LOADING_TITLE};
pub use nav::{build_keybind_hints, hover_style, NAV_HEIGHT};
pub use sections::{build_section_body, LineTarget, SectionBody, SectionContext};
pub use theme::{Palette, Theme};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

/// Columns a freshly mounted section slides in from
const TRANSITION_SHIFT: u16 = 6;

/// Render the whole UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let palette = app.theme.palette();
    app.hit_registry.clear();

    frame.render_widget(Block::default().style(palette.base()), area);
    app.backdrop.render(area, frame.buffer_mut(), palette);

    if app.is_loading() {
        loading::render_loading(frame, area, app.tick_count, palette);
        toasts::render_toasts(frame, area, &app.toasts, palette);
        return;
    }

    let ctx = LayoutContext::from_rect(area);
    let [nav_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    nav::render_nav(frame, nav_area, app, &ctx);
    render_body(frame, ctx.content_area(body_area), app, &ctx);
    nav::render_footer(frame, footer_area, app);
    toasts::render_toasts(frame, area, &app.toasts, palette);

    if let Some(hovered) = app.hit_registry.get_hovered() {
        if let Some(style) = hovered.hover_style {
            frame.buffer_mut().set_style(hovered.rect, style);
        }
    }
}

/// Active section body: scrolled, slid in during a transition, with its
/// visible click targets registered.
fn render_body(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let palette = app.theme.palette();

    let shift = app
        .transition
        .offset(app.tick_count, TRANSITION_SHIFT)
        .min(area.width.saturating_sub(1));
    let area = Rect::new(area.x + shift, area.y, area.width - shift, area.height);

    // Lay out at the settled width so targets do not reflow mid-slide
    let section_ctx = SectionContext {
        width: area.width + shift,
        layout: *ctx,
        palette,
        project_index: app.project_index,
        contact: &app.contact,
        contact_editing: app.contact_editing,
        caret_visible: app.cursor_blink.is_visible(),
    };
    let body = build_section_body(&app.view(), &section_ctx);

    let max_scroll = (body.lines.len() as u16).saturating_sub(area.height);
    app.scroll.set_max(max_scroll);
    let offset = app.scroll.offset;

    for target in &body.targets {
        let Some(row) = (target.line as u16).checked_sub(offset) else {
            continue;
        };
        if row >= area.height || target.x >= area.width {
            continue;
        }
        let width = target.width.min(area.width - target.x);
        app.hit_registry.register(
            Rect::new(area.x + target.x, area.y + row, width, 1),
            target.action.clone(),
            Some(hover_style(palette)),
        );
    }

    frame.render_widget(Paragraph::new(body.lines).scroll((offset, 0)), area);
}
