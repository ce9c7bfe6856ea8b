//! Clickable regions.
//!
//! Renderers register hit areas while drawing; the event loop hit-tests mouse
//! events against the registry built by the last frame.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::contact::ContactField;
use crate::models::SectionId;

/// What happens when a hit area is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Navigation bar tab
    SelectSection(SectionId),
    /// Call-to-action button that jumps to another section
    CallToAction(SectionId),
    /// Hand a URL or path to the system opener
    OpenLink(String),
    /// Open the resume
    DownloadResume,
    /// Focus a project card
    FocusProject(usize),
    /// Focus a contact form field
    FocusField(ContactField),
    SubmitContact,
}

#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over the area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Hit areas registered by the most recent frame.
///
/// The pointer position survives [`clear`](HitAreaRegistry::clear) so hover
/// styling stays stable across redraws.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Call at the start of each frame.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register an area. Later registrations win where areas overlap.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
        if let Some((x, y)) = self.pointer {
            if rect_contains(rect, x, y) {
                self.hovered = Some(self.areas.len() - 1);
            }
        }
    }

    /// Action of the topmost area under the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action.clone())
    }

    /// Track the pointer. Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let hovered = self.find_index(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Whether the pointer is currently over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| rect_contains(rect, x, y))
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|i| self.areas.get(i))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
