//! Error category classification.
//!
//! Categories drive how an error is surfaced: toast wording, whether a
//! retry makes sense, and the log level used.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures, DNS, timeouts. Transient.
    Network,

    /// The relay service answered with a 5xx. Transient.
    Server,

    /// The relay rejected the request (4xx) or the input was invalid.
    User,

    /// Filesystem and OS failures.
    System,

    /// Missing or malformed settings, including a broken content document.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Server => {
                "The mail service may be experiencing issues. Please try again later"
            }
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and paths",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
