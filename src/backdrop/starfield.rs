//! Starfield backdrop: twinkling stars, a few drifting shapes and the
//! section caption spelled out large in the middle.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use super::Backdrop;
use crate::ui::Palette;

const STAR_COUNT: usize = 48;
const STAR_FRAMES: [&str; 4] = ["·", "∙", "*", "∙"];
const SHAPE_GLYPHS: [&str; 4] = ["◆", "●", "▲", "■"];

/// Ticks per twinkle frame (~130ms at 60fps)
const TWINKLE_TICKS: u64 = 8;

#[derive(Debug, Clone, Copy)]
struct Star {
    /// Position as a fraction of the area, so resizes keep the layout
    x: f32,
    y: f32,
    phase: u64,
}

#[derive(Debug, Clone, Copy)]
struct Shape {
    x: f32,
    y: f32,
    glyph: &'static str,
    phase: f32,
}

/// Small xorshift generator so the field is stable between runs.
struct Xorshift(u64);

impl Xorshift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn unit(&mut self) -> f32 {
        (self.next() % 10_000) as f32 / 10_000.0
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    label: String,
    tick: u64,
    animated: bool,
    stars: Vec<Star>,
    shapes: Vec<Shape>,
}

impl Starfield {
    pub fn new(label: &str) -> Self {
        let mut rng = Xorshift(0x9E37_79B9_7F4A_7C15);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.unit(),
                y: rng.unit(),
                phase: rng.next() % STAR_FRAMES.len() as u64,
            })
            .collect();
        let shapes = SHAPE_GLYPHS
            .iter()
            .enumerate()
            .map(|(i, &glyph)| Shape {
                x: 0.12 + 0.25 * i as f32,
                y: if i % 2 == 0 { 0.25 } else { 0.75 },
                glyph,
                phase: i as f32 * 1.7,
            })
            .collect();

        Self {
            label: label.to_string(),
            tick: 0,
            animated: true,
            stars,
            shapes,
        }
    }

    /// Freeze or resume the animation.
    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Caption as drawn: uppercase and letter-spaced when there is room.
    fn caption(&self, width: u16) -> String {
        let upper = self.label.to_uppercase();
        let spaced = upper
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if spaced.width() <= width as usize {
            spaced
        } else {
            upper
        }
    }

    fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

impl Backdrop for Starfield {
    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn tick(&mut self, tick: u64) {
        if self.animated {
            self.tick = tick;
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let star_style = Style::default().fg(palette.backdrop);
        let max_x = f32::from(area.width - 1);
        let max_y = f32::from(area.height - 1);

        for star in &self.stars {
            let frame = (self.tick / TWINKLE_TICKS + star.phase) % STAR_FRAMES.len() as u64;
            let x = area.x + (star.x * max_x) as u16;
            let y = area.y + (star.y * max_y) as u16;
            Self::put(buf, x, y, STAR_FRAMES[frame as usize], star_style);
        }

        let t = self.tick as f32 * 0.05;
        for shape in &self.shapes {
            let bob = (t + shape.phase).sin() * 1.5;
            let x = area.x + (shape.x * max_x) as u16;
            let y = (shape.y * max_y + bob).clamp(0.0, max_y) as u16 + area.y;
            Self::put(buf, x, y, shape.glyph, star_style);
        }

        let caption = self.caption(area.width);
        let caption_width = (caption.width() as u16).min(area.width);
        let x = area.x + (area.width - caption_width) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(
            x,
            y,
            &caption,
            area.width as usize,
            Style::default()
                .fg(palette.backdrop_label)
                .add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_label_drawn_in_middle_row() {
        let mut field = Starfield::new("Portfolio");
        field.set_label("SKILLS");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        field.render(area, &mut buf, Theme::Dark.palette());
        assert!(row_text(&buf, 5).contains("S K I L L S"));
    }

    #[test]
    fn test_narrow_area_drops_letter_spacing() {
        let field = Starfield::new("Experience");
        assert_eq!(field.caption(12), "EXPERIENCE");
        assert_eq!(field.caption(40), "E X P E R I E N C E");
    }

    #[test]
    fn test_tiny_area_is_a_no_op() {
        let field = Starfield::new("Portfolio");
        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        field.render(area, &mut buf, Theme::Dark.palette());
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_frozen_field_ignores_ticks() {
        let mut field = Starfield::new("Portfolio").with_animation(false);
        field.tick(500);
        assert_eq!(field.tick, 0);
    }
}
