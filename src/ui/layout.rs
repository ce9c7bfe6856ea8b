//! Responsive layout.
//!
//! `LayoutContext` wraps the terminal size and answers the sizing questions
//! renderers ask: how wide the reading column is, whether the navigation
//! bar can afford labels, and whether cards sit side by side.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns); navigation shows icons only
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Widest the reading column gets, however large the terminal
pub const MAX_CONTENT_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

/// Terminal dimensions plus the sizing rules derived from them.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let column = ctx.content_area(frame.area());
/// if ctx.is_narrow() {
///     // icons-only navigation
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the terminal, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Navigation shows labels next to icons.
    pub fn show_nav_labels(&self) -> bool {
        !self.is_narrow()
    }

    /// Cards and columns sit side by side.
    pub fn use_two_columns(&self) -> bool {
        self.width >= breakpoints::MD_WIDTH
    }

    /// Centered reading column inside `area`, with a small side margin.
    pub fn content_area(&self, area: Rect) -> Rect {
        let margin = if self.is_extra_small() { 1 } else { 2 };
        let width = area
            .width
            .saturating_sub(margin * 2)
            .min(MAX_CONTENT_WIDTH);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        Rect::new(x, area.y, width, area.height)
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
