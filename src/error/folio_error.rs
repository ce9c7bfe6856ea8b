//! Unified error type for the application.

use std::fmt;

use super::category::ErrorCategory;
use super::content::ContentError;
use super::relay::RelayError;
use super::system::SystemError;

/// Unified error type.
///
/// Wraps the domain errors so the event loop can categorise, log and show
/// any of them the same way.
#[derive(Debug)]
pub enum FolioError {
    /// The portfolio document could not be loaded.
    Content(ContentError),

    /// The contact message could not be delivered.
    Relay(RelayError),

    /// Filesystem / OS errors.
    System(SystemError),
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Content(ContentError::Io { .. }) => ErrorCategory::System,
            FolioError::Content(_) => ErrorCategory::Configuration,
            FolioError::Relay(err) => match err {
                RelayError::NotConfigured { .. } => ErrorCategory::Configuration,
                RelayError::Rejected { status, .. } if *status >= 500 => ErrorCategory::Server,
                RelayError::Rejected { .. } => ErrorCategory::User,
                RelayError::Timeout(_) | RelayError::Transport(_) => ErrorCategory::Network,
            },
            FolioError::System(_) => ErrorCategory::System,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            FolioError::Relay(err) => err.is_retryable(),
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            FolioError::Content(err) => err.user_message(),
            FolioError::Relay(err) => err.user_message(),
            FolioError::System(err) => err.user_message(),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Content(err) => err.error_code(),
            FolioError::Relay(err) => err.error_code(),
            FolioError::System(err) => err.error_code(),
        }
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Content(err) => write!(f, "{}", err),
            FolioError::Relay(err) => write!(f, "{}", err),
            FolioError::System(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Content(err) => Some(err),
            FolioError::Relay(err) => Some(err),
            FolioError::System(err) => Some(err),
        }
    }
}

impl From<ContentError> for FolioError {
    fn from(err: ContentError) -> Self {
        FolioError::Content(err)
    }
}

impl From<RelayError> for FolioError {
    fn from(err: RelayError) -> Self {
        FolioError::Relay(err)
    }
}

impl From<SystemError> for FolioError {
    fn from(err: SystemError) -> Self {
        FolioError::System(err)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::System(err.into())
    }
}
