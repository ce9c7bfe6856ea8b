//! System-related error types.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// Could not determine a data directory for logs.
    NoDataDirectory,

    /// Failed to create a directory.
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not hand a link or file to the desktop opener.
    OpenFailed { target: String, message: String },
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoDataDirectory => {
                "Could not determine a data directory for log files.".to_string()
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory '{}'.", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::OpenFailed { target, .. } => format!("Could not open '{}'", target),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoDataDirectory => "SYS_NO_DATA_DIR",
            SystemError::DirectoryCreationFailed { .. } => "SYS_MKDIR",
            SystemError::IoError { .. } => "SYS_IO",
            SystemError::OpenFailed { .. } => "SYS_OPEN",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::NoDataDirectory => write!(f, "no data directory"),
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(f, "failed to create '{}': {}", path.display(), message)
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "failed to {} '{}': {}", operation, p.display(), message),
                None => write!(f, "failed to {}: {}", operation, message),
            },
            SystemError::OpenFailed { target, message } => {
                write!(f, "failed to open '{}': {}", target, message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

impl From<std::io::Error> for SystemError {
    fn from(err: std::io::Error) -> Self {
        SystemError::IoError {
            operation: "perform I/O".to_string(),
            path: None,
            message: err.to_string(),
        }
    }
}
