//! Errors from the contact-form email relay.

use thiserror::Error;

use crate::traits::HttpError;

/// Failures while delivering a contact message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    /// One or more relay credentials are not configured.
    #[error("email relay is not configured (missing {missing})")]
    NotConfigured { missing: String },

    /// The relay answered with a non-success status.
    #[error("email relay returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("email relay request timed out: {0}")]
    Timeout(String),

    #[error("could not reach email relay: {0}")]
    Transport(String),
}

impl RelayError {
    pub fn is_retryable(&self) -> bool {
        match self {
            RelayError::Timeout(_) | RelayError::Transport(_) => true,
            RelayError::Rejected { status, .. } => *status >= 500,
            RelayError::NotConfigured { .. } => false,
        }
    }

    /// Text shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::NotConfigured { .. } => {
                "The contact form is not configured yet. Please email me directly.".to_string()
            }
            _ => "Oops! Something went wrong. Please try again.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RelayError::NotConfigured { .. } => "RELAY_NOT_CONFIGURED",
            RelayError::Rejected { .. } => "RELAY_REJECTED",
            RelayError::Timeout(_) => "RELAY_TIMEOUT",
            RelayError::Transport(_) => "RELAY_TRANSPORT",
        }
    }
}

impl From<HttpError> for RelayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(msg) => RelayError::Timeout(msg),
            HttpError::ServerError { status, message } => RelayError::Rejected { status, message },
            HttpError::InvalidUrl(msg) => RelayError::NotConfigured {
                missing: format!("a valid relay URL ({})", msg),
            },
            other => RelayError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(RelayError::Rejected {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!RelayError::Rejected {
            status: 400,
            message: String::new()
        }
        .is_retryable());
        assert!(RelayError::Timeout("slow".to_string()).is_retryable());
        assert!(!RelayError::NotConfigured {
            missing: "service id".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_from_http_error() {
        let err: RelayError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, RelayError::Transport(_)));

        let err: RelayError = HttpError::ServerError {
            status: 422,
            message: "bad template".to_string(),
        }
        .into();
        assert_eq!(
            err,
            RelayError::Rejected {
                status: 422,
                message: "bad template".to_string()
            }
        );
    }
}
