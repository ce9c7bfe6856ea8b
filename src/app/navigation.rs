//! Section navigation and scrolling for the App.

use crate::models::SectionId;

use super::App;

/// Lines moved per mouse wheel notch
pub const WHEEL_SCROLL_LINES: u16 = 3;

impl App {
    /// Switch to `section` through the navigation controller.
    pub fn go_to_section(&mut self, section: SectionId) {
        if self.navigation.change_section(section) {
            self.sync_section();
        }
    }

    pub fn next_section(&mut self) {
        self.go_to_section(self.active_section().next());
    }

    pub fn prev_section(&mut self) {
        self.go_to_section(self.active_section().prev());
    }

    /// Jump by registry position (0-based); out-of-range is ignored.
    pub fn go_to_index(&mut self, index: usize) {
        if let Some(section) = SectionId::from_index(index) {
            self.go_to_section(section);
        }
    }

    /// React to a published section change: unmount the old view's state,
    /// start the enter transition and relabel the backdrop.
    pub(crate) fn sync_section(&mut self) {
        if self.label_follower.sync(self.backdrop.as_mut()) {
            self.mark_dirty();
        }

        if !matches!(self.section_rx.has_changed(), Ok(true)) {
            return;
        }
        let section = *self.section_rx.borrow_and_update();

        self.scroll.reset();
        self.project_index = 0;
        self.contact_editing = false;
        if self.animations {
            self.transition.start(self.tick_count);
        } else {
            self.transition.finish();
        }
        tracing::debug!(%section, "Mounted section view");
        self.mark_dirty();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll.scroll_up(lines);
        self.mark_dirty();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll.scroll_down(lines);
        self.mark_dirty();
    }

    /// Half a screen, for PgUp/PgDn.
    pub fn page_lines(&self) -> u16 {
        (self.terminal_height / 2).max(1)
    }

    pub fn focus_next_project(&mut self) {
        let count = self.content.projects.len();
        if count > 0 {
            self.project_index = (self.project_index + 1) % count;
            self.mark_dirty();
        }
    }

    pub fn focus_prev_project(&mut self) {
        let count = self.content.projects.len();
        if count > 0 {
            self.project_index = (self.project_index + count - 1) % count;
            self.mark_dirty();
        }
    }
}
