//! Section navigation.
//!
//! [`NavigationController`] is the single owner of [`NavigationState`]. All
//! mutations go through it on the UI task: section changes are synchronous,
//! and the loading timer only posts a message back to the owner, which then
//! calls [`NavigationController::handle_loading_elapsed`].
//!
//! Observers (the renderer and the backdrop) follow the active section
//! through a `tokio::sync::watch` channel obtained from
//! [`NavigationController::subscribe`].

mod loading_gate;

use std::time::Duration;

use tokio::sync::watch;

use crate::models::SectionId;

pub use loading_gate::LoadingGate;

/// The navigation core's only mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: SectionId,
    /// True until the loading timer fires. Never returns to true.
    pub is_loading: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            is_loading: true,
        }
    }
}

#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
    section_tx: watch::Sender<SectionId>,
    gate: LoadingGate,
    torn_down: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        let (section_tx, _) = watch::channel(SectionId::Home);
        Self {
            state: NavigationState::default(),
            section_tx,
            gate: LoadingGate::new(),
            torn_down: false,
        }
    }

    /// Reset to home with the loading gate up and arm the one-shot timer.
    ///
    /// `on_elapsed` runs on a background task after `delay`; it should
    /// forward a message to whoever owns this controller rather than touch
    /// the controller itself.
    pub fn initialize<F>(&mut self, delay: Duration, on_elapsed: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.torn_down = false;
        self.state = NavigationState::default();
        self.section_tx.send_replace(SectionId::Home);
        self.gate.arm(delay, on_elapsed);
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Navigation initialized");
    }

    /// Apply the loading timer's completion.
    ///
    /// Returns `true` if the gate was lowered by this call. Late deliveries
    /// after teardown, and repeats, are no-ops.
    pub fn handle_loading_elapsed(&mut self) -> bool {
        if self.torn_down || !self.state.is_loading {
            return false;
        }
        self.state.is_loading = false;
        tracing::debug!("Loading gate lowered");
        true
    }

    /// Make `section` active. Returns `true` if the active section changed.
    pub fn change_section(&mut self, section: SectionId) -> bool {
        if self.torn_down || self.state.active_section == section {
            return false;
        }
        let previous = self.state.active_section;
        self.state.active_section = section;
        self.section_tx.send_replace(section);
        tracing::debug!(from = %previous, to = %section, "Section changed");
        true
    }

    /// Change section from an external identifier (deep link, CLI flag).
    ///
    /// Identifiers outside the known set are ignored and leave the state
    /// untouched. Returns whether the identifier was recognised.
    pub fn request_section(&mut self, raw: &str) -> bool {
        match raw.parse::<SectionId>() {
            Ok(section) => {
                self.change_section(section);
                true
            }
            Err(err) => {
                tracing::debug!(%err, "Ignoring section request");
                false
            }
        }
    }

    /// Cancel the pending timer and stop accepting mutations.
    pub fn teardown(&mut self) {
        self.gate.cancel();
        self.torn_down = true;
    }

    /// Receiver that observes every section change.
    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.section_tx.subscribe()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_section(&self) -> SectionId {
        self.state.active_section
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.gate.cancel();
    }
}
