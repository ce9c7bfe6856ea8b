//! Errors raised while loading the portfolio document.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the content loader.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read portfolio document '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("portfolio document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("portfolio document field '{field}' {reason}")]
    Invalid { field: String, reason: String },
}

impl ContentError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Io { .. } => "CONTENT_IO",
            ContentError::Parse(_) => "CONTENT_PARSE",
            ContentError::Invalid { .. } => "CONTENT_INVALID",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ContentError::Io { path, .. } => {
                format!("Could not read the portfolio file '{}'.", path.display())
            }
            ContentError::Parse(err) => format!(
                "The portfolio file is malformed (line {}, column {}).",
                err.line(),
                err.column()
            ),
            ContentError::Invalid { field, reason } => {
                format!("The portfolio field '{}' {}.", field, reason)
            }
        }
    }
}
