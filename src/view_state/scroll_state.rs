//! Vertical scroll position of the section body.

/// Scroll offset for the active section body.
///
/// `max_scroll` is written back by the renderer once the content height is
/// known; offsets are clamped against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_scroll: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_scroll);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_scroll;
    }

    /// Record the renderer's maximum and clamp the offset to it.
    pub fn set_max(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.offset = self.offset.min(max_scroll);
    }

    /// Back to the top, used when the section changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_max() {
        let mut scroll = ScrollState::new();
        scroll.set_max(10);
        scroll.scroll_down(4);
        assert_eq!(scroll.offset, 4);
        scroll.scroll_down(100);
        assert_eq!(scroll.offset, 10);
        assert!(scroll.is_at_bottom());
        scroll.scroll_up(3);
        assert_eq!(scroll.offset, 7);
        scroll.scroll_up(100);
        assert!(scroll.is_at_top());
    }

    #[test]
    fn test_shrinking_max_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.set_max(20);
        scroll.to_bottom();
        scroll.set_max(5);
        assert_eq!(scroll.offset, 5);
        scroll.reset();
        assert_eq!(scroll, ScrollState::default());
    }
}
