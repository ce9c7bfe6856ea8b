//! Contact form state and validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Submit,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
        ContactField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
            ContactField::Submit => "Send Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "your.email@example.com",
            ContactField::Subject => "What's this about?",
            ContactField::Message => "Tell me about your project...",
            ContactField::Submit => "",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, ContactField::Submit)
    }
}

/// Why a submission was refused before reaching the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FormError {
    pub fn field(&self) -> ContactField {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidEmail => ContactField::Email,
        }
    }
}

/// Payload handed to the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Local timestamp of submission
    pub time: String,
}

impl ContactMessage {
    /// Stamp a message with the current local time.
    pub fn now(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    /// A submission is in flight
    pub loading: bool,
    /// Last validation failure, cleared on edit
    pub error: Option<FormError>,
    /// Shown after a successful send until the next edit
    pub success_notice: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
            ContactField::Submit => "",
        }
    }

    fn value_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Subject => Some(&mut self.subject),
            ContactField::Message => Some(&mut self.message),
            ContactField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    /// Type into the focused field. Ignored while sending.
    pub fn insert_char(&mut self, c: char) {
        if self.loading {
            return;
        }
        let focus = self.focus;
        if let Some(value) = self.value_mut(focus) {
            value.push(c);
            self.error = None;
            self.success_notice = None;
        }
    }

    /// Newline in the message body; other fields advance focus instead.
    pub fn insert_newline(&mut self) {
        if self.focus == ContactField::Message {
            self.insert_char('\n');
        } else {
            self.focus_next();
        }
    }

    pub fn backspace(&mut self) {
        if self.loading {
            return;
        }
        let focus = self.focus;
        if let Some(value) = self.value_mut(focus) {
            value.pop();
            self.error = None;
        }
    }

    /// Check every field; the first failure wins.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ] {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and enter the sending state.
    ///
    /// Returns `None` when already sending or when validation fails; in the
    /// latter case the error is kept on the form and focus jumps to the field.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.loading {
            return None;
        }
        if let Err(err) = self.validate() {
            self.focus = err.field();
            self.error = Some(err);
            return None;
        }
        self.loading = true;
        self.error = None;
        self.success_notice = None;
        Some(ContactMessage::now(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            &self.message,
        ))
    }

    /// Relay accepted the message: show the thank-you notice and clear the form.
    pub fn finish_success(&mut self, name: &str) {
        *self = Self {
            success_notice: Some(format!(
                "Thank you, {}! Your message has been sent. I will respond soon.",
                name
            )),
            ..Self::default()
        };
    }

    /// Relay failed: keep what the user typed so they can retry.
    pub fn finish_failure(&mut self) {
        self.loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Sending..."
        } else {
            ContactField::Submit.label()
        }
    }
}
