//! Client configuration: defaults plus environment overrides.

use std::time::Duration;

/// Default Helix API root.
pub const HELIX_BASE: &str = "https://api.twitch.tv/helix";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`crate::HelixClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: String,
    /// API root without a trailing slash; endpoint paths are appended to it.
    pub base_url: String,
    /// Per-call deadline applied by the transport.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            base_url: HELIX_BASE.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Load from `TWITCH_CLIENT_ID`, `HELIX_BASE_URL` and `HELIX_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(id) = lookup("TWITCH_CLIENT_ID") {
            config.client_id = id.trim().to_string();
        }
        if let Some(url) = lookup("HELIX_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup("HELIX_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "Ignoring invalid HELIX_TIMEOUT_SECS"),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
