//! Startup: configuration and logging.
//!
//! - [`config`] - `FolioConfig` defaults, environment and builder overrides
//! - [`logging`] - file-backed tracing subscriber

pub mod config;
pub mod logging;

pub use config::{FolioConfig, RelaySettings, DEFAULT_LOADING_DELAY, DEFAULT_TICK_INTERVAL};
pub use logging::init_logging;
