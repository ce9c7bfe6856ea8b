//! Application state and logic for the TUI.
//!
//! - [`App`] - owns navigation, the backdrop, the contact form and UI state
//! - [`AppMessage`] - results posted back by background tasks
//! - [`Toast`] / [`Transition`] - transient presentation state

mod cursor_blink;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use cursor_blink::CursorBlinkState;
pub use messages::AppMessage;
pub use types::{
    Toast, ToastKind, ToastQueue, Transition, MAX_TOASTS, TOAST_TTL_TICKS, TRANSITION_TICKS,
};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::backdrop::{Backdrop, LabelFollower, Starfield};
use crate::contact::{ContactForm, EmailRelay};
use crate::error::SystemError;
use crate::models::{ContentDocument, SectionId};
use crate::navigation::NavigationController;
use crate::startup::FolioConfig;
use crate::ui::{HitAreaRegistry, Theme};
use crate::view_state::{resolve, ScrollState, ViewDescriptor};

/// Opens a URL or file path outside the terminal.
pub type LinkOpener = Box<dyn Fn(&str) -> Result<(), SystemError> + Send>;

/// Redraw cadence for the backdrop when nothing else changes (~15fps)
const BACKDROP_REDRAW_TICKS: u64 = 4;

/// Hand `target` to the desktop's default handler.
pub fn system_opener(target: &str) -> Result<(), SystemError> {
    open::that_detached(target).map_err(|e| SystemError::OpenFailed {
        target: target.to_string(),
        message: e.to_string(),
    })
}

/// Main application state
pub struct App {
    /// Portfolio document, read-only for the life of the process
    pub content: Arc<ContentDocument>,
    pub navigation: NavigationController,
    /// Render-layer subscription to section changes
    section_rx: watch::Receiver<SectionId>,
    pub backdrop: Box<dyn Backdrop>,
    label_follower: LabelFollower,
    pub scroll: ScrollState,
    pub transition: Transition,
    pub theme: Theme,
    pub toasts: ToastQueue,
    pub contact: ContactForm,
    /// Keys go to the contact form instead of navigation
    pub contact_editing: bool,
    pub cursor_blink: CursorBlinkState,
    /// Project card targeted by `o`
    pub project_index: usize,
    pub hit_registry: HitAreaRegistry,
    relay: Option<Arc<dyn EmailRelay>>,
    opener: LinkOpener,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    loading_delay: Duration,
    initial_section: Option<String>,
    pub animations: bool,
    pub tick_count: u64,
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    pub fn new(content: Arc<ContentDocument>, config: &FolioConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let navigation = NavigationController::new();
        let section_rx = navigation.subscribe();
        let label_follower = LabelFollower::new(navigation.subscribe());
        let backdrop = Starfield::new(SectionId::Home.backdrop_label())
            .with_animation(config.animations);

        Self {
            content,
            navigation,
            section_rx,
            backdrop: Box::new(backdrop),
            label_follower,
            scroll: ScrollState::new(),
            transition: Transition::default(),
            theme: Theme::default(),
            toasts: ToastQueue::new(),
            contact: ContactForm::new(),
            contact_editing: false,
            cursor_blink: CursorBlinkState::new(),
            project_index: 0,
            hit_registry: HitAreaRegistry::new(),
            relay: None,
            opener: Box::new(system_opener),
            message_tx,
            message_rx: Some(message_rx),
            loading_delay: config.loading_delay,
            initial_section: config.initial_section.clone(),
            animations: config.animations,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    pub fn with_relay(mut self, relay: Arc<dyn EmailRelay>) -> Self {
        self.relay = Some(relay);
        self
    }

    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_backdrop(mut self, backdrop: Box<dyn Backdrop>) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Arm the loading gate and apply the launch deep link, if any.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        let tx = self.message_tx.clone();
        self.navigation.initialize(self.loading_delay, move || {
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(AppMessage::LoadingElapsed);
        });

        if let Some(raw) = self.initial_section.take() {
            if !self.navigation.request_section(&raw) {
                tracing::info!(section = %raw, "Unknown launch section, staying on home");
            }
        }
        self.sync_section();
        self.mark_dirty();
    }

    /// Cancel background work. Late timer messages become no-ops.
    pub fn shutdown(&mut self) {
        self.navigation.teardown();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn active_section(&self) -> SectionId {
        self.navigation.active_section()
    }

    pub fn is_loading(&self) -> bool {
        self.navigation.is_loading()
    }

    /// View for the active section.
    pub fn view(&self) -> ViewDescriptor<'_> {
        resolve(self.navigation.active_section(), &self.content)
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Advance animations by one UI tick.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let now = self.tick_count;

        self.backdrop.tick(now);
        self.sync_section();

        if self.toasts.prune(now) {
            self.mark_dirty();
        }
        if self.transition.is_active(now) {
            self.mark_dirty();
        }
        if self.contact_editing && self.cursor_blink.update(now) {
            self.mark_dirty();
        }
        // Spinner on the loading screen and the backdrop both move with time
        if self.is_loading() || (self.animations && now % BACKDROP_REDRAW_TICKS == 0) {
            self.mark_dirty();
        }
    }

    /// Hand a message to the event loop as if a background task sent it.
    pub fn post(&self, message: AppMessage) {
        let _ = self.message_tx.send(message);
    }

    pub(crate) fn open_target(&self, target: &str) -> Result<(), SystemError> {
        (self.opener)(target)
    }

    pub(crate) fn relay(&self) -> Option<Arc<dyn EmailRelay>> {
        self.relay.clone()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
