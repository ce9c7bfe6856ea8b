//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so log lines go to a file under the user's data
//! directory. The filter comes from `FOLIO_LOG` (default `info`).

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::SystemError;

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "folio.log";

/// Resolve the log directory: explicit override, else `<data_local_dir>/folio/logs`.
pub fn resolve_log_dir(override_dir: Option<&Path>) -> Result<PathBuf, SystemError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    dirs::data_local_dir()
        .map(|base| base.join("folio").join("logs"))
        .ok_or(SystemError::NoDataDirectory)
}

/// Install the global tracing subscriber writing to `<log_dir>/folio.log`.
///
/// Returns the log file path.
pub fn init_logging(override_dir: Option<&Path>) -> Result<PathBuf, SystemError> {
    let dir = resolve_log_dir(override_dir)?;
    fs::create_dir_all(&dir).map_err(|e| SystemError::DirectoryCreationFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;

    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path).map_err(|e| SystemError::IoError {
        operation: "create log file".to_string(),
        path: Some(path.clone()),
        message: e.to_string(),
    })?;

    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| SystemError::IoError {
            operation: "install tracing subscriber".to_string(),
            path: None,
            message: e.to_string(),
        })?;

    Ok(path)
}
