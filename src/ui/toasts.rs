//! Toast notifications stacked in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{Toast, ToastKind, ToastQueue};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::text::truncate;
use super::theme::{Palette, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

const TOAST_HEIGHT: u16 = 3;
const TOAST_MAX_WIDTH: u16 = 48;

fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => COLOR_SUCCESS,
        ToastKind::Error => COLOR_ERROR,
        ToastKind::Info => COLOR_INFO,
    }
}

/// Rect for the `index`-th toast (newest at the top).
pub fn toast_rect(area: Rect, toast: &Toast, index: u16) -> Option<Rect> {
    let y = area.y + 1 + index * TOAST_HEIGHT;
    if y + TOAST_HEIGHT > area.bottom() || area.width < 12 {
        return None;
    }
    let width = (toast.text.width() as u16 + 6)
        .min(TOAST_MAX_WIDTH)
        .min(area.width - 2);
    Some(Rect::new(area.right() - width - 1, y, width, TOAST_HEIGHT))
}

pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue, palette: &Palette) {
    for (index, toast) in toasts.iter().rev().enumerate() {
        let Some(rect) = toast_rect(area, toast, index as u16) else {
            break;
        };
        let color = toast_color(toast.kind);
        let inner = render_dialog_frame(
            frame,
            rect,
            &DialogFrameConfig::new("").accent(color),
            palette,
        );
        let text = truncate(&toast.text, inner.width.saturating_sub(2) as usize);
        let line = Line::from(vec![
            Span::styled(format!("{} ", toast.kind.icon()), Style::default().fg(color)),
            Span::styled(text, Style::default().fg(palette.text)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
