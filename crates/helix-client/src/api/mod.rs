//! Twitch Helix chat REST API client.
//!
//! Every endpoint goes through one generic core: params are encoded by
//! [`params`], sent by [`HelixClient::dispatch`], and returned as a
//! [`HelixResponse`] pairing the decoded payload with its [`Envelope`].

mod badges;
mod chatters;
mod color;
mod emotes;
mod messages;
mod request;
mod settings;

pub mod envelope;
pub mod models;
pub mod params;

pub use badges::GetChannelChatBadgesParams;
pub use chatters::GetChatChattersParams;
pub use color::{GetUserChatColorParams, UpdateUserChatColorParams};
pub use emotes::{GetChannelEmotesParams, GetEmoteSetsParams, GetUserEmotesParams};
pub use envelope::{Envelope, HelixResponse, RateLimit, RawResponse};
pub use messages::{SendChatAnnouncementParams, SendChatMessageParams, SendShoutoutParams};
pub use models::*;
pub use params::{QueryPairs, QueryParams};
pub use request::ApiRequest;
pub use reqwest::Method;
pub use settings::{GetChatSettingsParams, UpdateChatSettingsParams};

use crate::{ClientConfig, HelixError, Token};

/// Twitch Helix API client with automatic auth header injection.
///
/// Holds no per-call state; share one instance across tasks.
#[derive(Debug, Clone)]
pub struct HelixClient {
    pub(super) http: reqwest::Client,
    pub(super) config: ClientConfig,
}

impl HelixClient {
    /// Client for `client_id` with the default base URL and timeout.
    pub fn new(client_id: String) -> Result<Self, HelixError> {
        Self::with_config(ClientConfig::new(client_id))
    }

    /// Build a client whose transport applies `config.timeout` to every call.
    pub fn with_config(config: ClientConfig) -> Result<Self, HelixError> {
        let http = build_http(&config)?;
        Ok(Self { http, config })
    }

    /// Use an existing transport as-is.
    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn build_http(config: &ClientConfig) -> Result<reqwest::Client, HelixError> {
    Ok(reqwest::Client::builder().timeout(config.timeout).build()?)
}
