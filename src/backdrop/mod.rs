//! Decorative backdrop drawn behind every section.
//!
//! The backdrop animates on its own from the UI tick and knows nothing about
//! navigation except the label it is told to show. [`LabelFollower`] keeps
//! that label in step with the active section.

mod starfield;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tokio::sync::watch;

use crate::models::SectionId;
use crate::ui::Palette;

pub use starfield::Starfield;

/// A continuously animated background surface.
///
/// Implementations must never fail or block: the navigation core calls
/// [`set_label`](Backdrop::set_label) and moves on.
pub trait Backdrop: Send {
    /// Replace the large caption.
    fn set_label(&mut self, text: &str);

    /// Advance the animation to `tick`.
    fn tick(&mut self, tick: u64);

    /// Draw into `area`. Called before the foreground so it sits underneath.
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette);
}

/// Relabels a backdrop whenever the active section changes.
#[derive(Debug)]
pub struct LabelFollower {
    rx: watch::Receiver<SectionId>,
}

impl LabelFollower {
    pub fn new(rx: watch::Receiver<SectionId>) -> Self {
        Self { rx }
    }

    /// Push the latest section label into `backdrop` if it changed since the
    /// last call. Returns whether a new label was applied.
    pub fn sync(&mut self, backdrop: &mut dyn Backdrop) -> bool {
        match self.rx.has_changed() {
            Ok(true) => {
                let section = *self.rx.borrow_and_update();
                backdrop.set_label(section.backdrop_label());
                true
            }
            // Sender gone means the controller is being dropped; keep the old label
            _ => false,
        }
    }
}
