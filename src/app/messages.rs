//! Messages delivered to the App from background tasks.

use crate::error::RelayError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The loading timer fired
    LoadingElapsed,
    /// The relay accepted a contact message from `name`
    ContactSent { name: String },
    /// The relay failed to deliver a contact message
    ContactFailed { error: RelayError },
}
