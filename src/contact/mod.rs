//! Contact form and the relay that delivers it.
//!
//! The form is plain state owned by the app. Submitting hands a
//! [`ContactMessage`] to an [`EmailRelay`] on a background task; the result
//! comes back to the app as a message.

mod form;
mod relay;

pub use form::{ContactField, ContactForm, ContactMessage, FormError};
pub use relay::{EmailJsRelay, EmailRelay, EMAILJS_SEND_PATH};
