//! Startup configuration.
//!
//! Defaults are overridden by `FOLIO_*` environment variables, which are in
//! turn overridden by command-line flags.

use std::path::PathBuf;
use std::time::Duration;

/// Default loading-gate delay.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2000);

/// Default UI tick (~60fps).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Default EmailJS REST host.
pub const DEFAULT_EMAILJS_URL: &str = "https://api.emailjs.com";

/// Credentials for the EmailJS relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelaySettings {
    /// Base URL of the relay API
    pub base_url: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    /// EmailJS public key (sent as `user_id`)
    pub public_key: Option<String>,
}

impl RelaySettings {
    /// Names of the settings that are still missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.as_deref().map_or(true, str::is_empty) {
            missing.push("FOLIO_EMAILJS_SERVICE_ID");
        }
        if self.template_id.as_deref().map_or(true, str::is_empty) {
            missing.push("FOLIO_EMAILJS_TEMPLATE_ID");
        }
        if self.public_key.as_deref().map_or(true, str::is_empty) {
            missing.push("FOLIO_EMAILJS_PUBLIC_KEY");
        }
        missing
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Application configuration.
///
/// ```ignore
/// use folio::startup::FolioConfig;
///
/// let config = FolioConfig::from_env()
///     .with_content_path("me.json")
///     .with_loading_delay(std::time::Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// Portfolio document path; `None` uses the bundled sample
    pub content_path: Option<PathBuf>,
    /// How long the loading screen stays up
    pub loading_delay: Duration,
    /// UI tick interval
    pub tick_interval: Duration,
    /// Section requested on launch (deep link), applied after initialization
    pub initial_section: Option<String>,
    /// Directory for log files; `None` resolves to the user data dir
    pub log_dir: Option<PathBuf>,
    /// Backdrop motion and section transitions
    pub animations: bool,
    pub relay: RelaySettings,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            loading_delay: DEFAULT_LOADING_DELAY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            initial_section: None,
            log_dir: None,
            animations: true,
            relay: RelaySettings {
                base_url: DEFAULT_EMAILJS_URL.to_string(),
                ..RelaySettings::default()
            },
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_initial_section(mut self, section: impl Into<String>) -> Self {
        self.initial_section = Some(section.into());
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    pub fn with_relay(mut self, relay: RelaySettings) -> Self {
        self.relay = relay;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Unparseable numeric values are ignored with a warning.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("FOLIO_CONTENT").filter(|v| !v.is_empty()) {
            config.content_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("FOLIO_LOADING_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.loading_delay = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid FOLIO_LOADING_MS"),
            }
        }

        if let Some(dir) = lookup("FOLIO_LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        if let Some(url) = lookup("FOLIO_EMAILJS_URL").filter(|v| !v.is_empty()) {
            config.relay.base_url = url;
        }
        config.relay.service_id = lookup("FOLIO_EMAILJS_SERVICE_ID");
        config.relay.template_id = lookup("FOLIO_EMAILJS_TEMPLATE_ID");
        config.relay.public_key = lookup("FOLIO_EMAILJS_PUBLIC_KEY");

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert!(config.content_path.is_none());
        assert_eq!(config.loading_delay, Duration::from_millis(2000));
        assert_eq!(config.tick_interval, Duration::from_millis(16));
        assert_eq!(config.relay.base_url, DEFAULT_EMAILJS_URL);
        assert!(!config.relay.is_configured());
    }

    #[test]
    fn test_from_vars_reads_everything() {
        let config = FolioConfig::from_vars(lookup_from(&[
            ("FOLIO_CONTENT", "/tmp/me.json"),
            ("FOLIO_LOADING_MS", "250"),
            ("FOLIO_EMAILJS_URL", "http://localhost:9999"),
            ("FOLIO_EMAILJS_SERVICE_ID", "svc"),
            ("FOLIO_EMAILJS_TEMPLATE_ID", "tpl"),
            ("FOLIO_EMAILJS_PUBLIC_KEY", "pk"),
        ]));

        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/me.json")));
        assert_eq!(config.loading_delay, Duration::from_millis(250));
        assert_eq!(config.relay.base_url, "http://localhost:9999");
        assert!(config.relay.is_configured());
    }

    #[test]
    fn test_invalid_loading_ms_keeps_default() {
        let config = FolioConfig::from_vars(lookup_from(&[("FOLIO_LOADING_MS", "soon")]));
        assert_eq!(config.loading_delay, DEFAULT_LOADING_DELAY);
    }

    #[test]
    fn test_missing_relay_settings_are_named() {
        let relay = RelaySettings {
            base_url: DEFAULT_EMAILJS_URL.to_string(),
            service_id: Some("svc".to_string()),
            template_id: Some(String::new()),
            public_key: None,
        };
        assert_eq!(
            relay.missing(),
            vec!["FOLIO_EMAILJS_TEMPLATE_ID", "FOLIO_EMAILJS_PUBLIC_KEY"]
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = FolioConfig::new()
            .with_content_path("a.json")
            .with_loading_delay(Duration::ZERO)
            .with_initial_section("projects");
        assert_eq!(config.content_path, Some(PathBuf::from("a.json")));
        assert_eq!(config.loading_delay, Duration::ZERO);
        assert_eq!(config.initial_section.as_deref(), Some("projects"));
    }
}
