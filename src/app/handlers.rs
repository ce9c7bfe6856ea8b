//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::contact::ContactField;
use crate::error::{ErrorCategory, FolioError, RelayError};
use crate::models::SectionId;
use crate::ui::ClickAction;

use super::navigation::WHEEL_SCROLL_LINES;
use super::{App, AppMessage, ToastKind};

impl App {
    /// Handle a message posted by a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoadingElapsed => {
                if self.navigation.handle_loading_elapsed() && self.animations {
                    self.transition.start(self.tick_count);
                }
            }
            AppMessage::ContactSent { name } => {
                self.contact.finish_success(&name);
                self.toasts
                    .push(ToastKind::Success, "Message sent", self.tick_count);
            }
            AppMessage::ContactFailed { error } => {
                self.contact.finish_failure();
                self.report_error(error);
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // Only quitting works behind the loading screen
        if self.is_loading() {
            if key.code == KeyCode::Char('q') {
                self.quit();
            }
            return;
        }

        if self.contact_editing {
            self.handle_contact_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.prev_section(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.next_section(),
            KeyCode::Char(c @ '1'..='6') => {
                self.go_to_index(c as usize - '1' as usize);
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.page_lines()),
            KeyCode::PageDown => self.scroll_down(self.page_lines()),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => self.handle_section_key(key.code),
        }
    }

    fn handle_section_key(&mut self, code: KeyCode) {
        match (self.active_section(), code) {
            (SectionId::Home, KeyCode::Char('w')) => self.go_to_section(SectionId::Projects),
            (SectionId::Home, KeyCode::Char('g')) => self.go_to_section(SectionId::Contact),
            (SectionId::About, KeyCode::Char('r')) => self.open_resume(),
            (SectionId::Projects, KeyCode::Char('j')) => self.focus_next_project(),
            (SectionId::Projects, KeyCode::Char('k')) => self.focus_prev_project(),
            (SectionId::Projects, KeyCode::Char('o') | KeyCode::Enter) => {
                self.open_focused_project()
            }
            (SectionId::Contact, KeyCode::Enter | KeyCode::Char('i')) => self.begin_contact_edit(),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        self.cursor_blink.reset(self.tick_count);
        match key.code {
            KeyCode::Esc => self.contact_editing = false,
            KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact()
            }
            KeyCode::Enter if self.contact.focus == ContactField::Submit => self.submit_contact(),
            KeyCode::Enter => self.contact.insert_newline(),
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) => self.contact.insert_char(c),
            _ => {}
        }
    }

    /// Bracketed paste goes into the focused contact field.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.contact_editing || self.is_loading() {
            return;
        }
        let multiline = self.contact.focus == ContactField::Message;
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' if !multiline => self.contact.insert_char(' '),
                c => self.contact.insert_char(c),
            }
        }
        self.cursor_blink.reset(self.tick_count);
        self.mark_dirty();
    }

    /// Handle a mouse event against the last frame's hit areas.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    self.handle_click(action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollUp if !self.is_loading() => self.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown if !self.is_loading() => {
                self.scroll_down(WHEEL_SCROLL_LINES)
            }
            _ => {}
        }
    }

    /// Apply a clicked hit area.
    pub fn handle_click(&mut self, action: ClickAction) {
        self.mark_dirty();
        tracing::debug!(?action, "Click");
        match action {
            ClickAction::SelectSection(section) | ClickAction::CallToAction(section) => {
                self.go_to_section(section)
            }
            ClickAction::OpenLink(url) => self.open_link(&url),
            ClickAction::DownloadResume => self.open_resume(),
            ClickAction::FocusProject(index) => {
                if index < self.content.projects.len() {
                    self.project_index = index;
                }
            }
            ClickAction::FocusField(field) => {
                self.begin_contact_edit();
                self.contact.set_focus(field);
            }
            ClickAction::SubmitContact => self.submit_contact(),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.toasts.push(
            ToastKind::Info,
            format!("Switched to {} theme", self.theme.name()),
            self.tick_count,
        );
        self.mark_dirty();
    }

    pub fn begin_contact_edit(&mut self) {
        if self.active_section() == SectionId::Contact {
            self.contact_editing = true;
            self.cursor_blink.reset(self.tick_count);
        }
    }

    /// Validate the form and send it on a background task.
    ///
    /// The outcome arrives later as [`AppMessage::ContactSent`] or
    /// [`AppMessage::ContactFailed`].
    pub fn submit_contact(&mut self) {
        let Some(message) = self.contact.begin_submit() else {
            return;
        };
        let tx = self.message_tx.clone();

        let Some(relay) = self.relay() else {
            let _ = tx.send(AppMessage::ContactFailed {
                error: RelayError::NotConfigured {
                    missing: "email relay".to_string(),
                },
            });
            return;
        };

        tokio::spawn(async move {
            let outcome = match relay.send(&message).await {
                Ok(()) => AppMessage::ContactSent { name: message.name },
                Err(error) => AppMessage::ContactFailed { error },
            };
            let _ = tx.send(outcome);
        });
    }

    pub fn open_link(&mut self, target: &str) {
        match self.open_target(target) {
            Ok(()) => {
                tracing::info!(%target, "Opened link");
                self.toasts
                    .push(ToastKind::Info, format!("Opening {}", target), self.tick_count);
            }
            Err(err) => self.report_error(err),
        }
    }

    /// Log a failure by category and surface it as an error toast.
    pub fn report_error(&mut self, err: impl Into<FolioError>) {
        let err = err.into();
        let category = err.category();
        match category {
            ErrorCategory::Server | ErrorCategory::System => {
                tracing::error!(code = err.error_code(), %category, %err, "Operation failed")
            }
            _ => tracing::warn!(code = err.error_code(), %category, %err, "Operation failed"),
        }
        self.toasts
            .push(ToastKind::Error, err.user_message(), self.tick_count);
        self.mark_dirty();
    }

    pub fn open_resume(&mut self) {
        match self.content.personal.resume_url.clone() {
            Some(url) => self.open_link(&url),
            None => self.toasts.push(
                ToastKind::Info,
                "Resume is not available yet",
                self.tick_count,
            ),
        }
    }

    pub fn open_focused_project(&mut self) {
        let link = self
            .content
            .projects
            .get(self.project_index)
            .and_then(|p| p.primary_link())
            .map(str::to_string);
        if let Some(link) = link {
            self.open_link(&link);
        }
    }
}
