//! Twitch Helix chat API client library.
//!
//! Provides typed access to the chat family of Helix endpoints (chatters,
//! badges, emotes, announcements, messages, settings, colors) on top of a
//! single generic request/response core.

pub mod api;
pub mod config;

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub use api::{Envelope, HelixClient, HelixResponse, RateLimit};
pub use config::ClientConfig;

/// Access token supplied by the caller.
///
/// Acquiring and refreshing tokens happens outside this crate; the client
/// only reads `access_token` when building request headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Space separated list of granted scopes.
    #[serde(default)]
    pub scope: String,
    /// Unix timestamp (seconds). Zero means unknown.
    #[serde(default)]
    pub expires_at: i64,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            scope: String::new(),
            expires_at: 0,
        }
    }

    /// Whether the token was granted `scope`.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|s| s == scope)
    }

    /// Whether the token is past its expiry. Tokens with unknown expiry never expire here.
    pub fn is_expired(&self) -> bool {
        self.expires_at > 0 && Utc::now().timestamp() >= self.expires_at
    }
}

/// Unified error type for the helix-client crate.
///
/// API-level failures (4xx/5xx with a JSON error body) are not errors; they
/// are reported through [`Envelope`] so callers can tell "the API said no"
/// apart from "the call could not be made".
#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The envelope is hydrated from whatever the response carried, so rate
    /// limits and the cursor survive a payload that does not match.
    #[error("failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        envelope: Box<Envelope>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HelixError {
    /// Whether the error was raised before any network call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(self, HelixError::Validation(_))
    }

    /// Envelope of the response that failed to decode.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            HelixError::Decode { envelope, .. } => Some(&**envelope),
            _ => None,
        }
    }
}

/// OAuth scopes referenced by the chat endpoints.
pub mod scopes {
    pub const MODERATOR_READ_CHATTERS: &str = "moderator:read:chatters";
    pub const MODERATOR_MANAGE_ANNOUNCEMENTS: &str = "moderator:manage:announcements";
    pub const MODERATOR_READ_CHAT_SETTINGS: &str = "moderator:read:chat_settings";
    pub const MODERATOR_MANAGE_CHAT_SETTINGS: &str = "moderator:manage:chat_settings";
    pub const MODERATOR_MANAGE_SHOUTOUTS: &str = "moderator:manage:shoutouts";
    pub const USER_READ_EMOTES: &str = "user:read:emotes";
    pub const USER_WRITE_CHAT: &str = "user:write:chat";
    pub const USER_MANAGE_CHAT_COLOR: &str = "user:manage:chat_color";
}
