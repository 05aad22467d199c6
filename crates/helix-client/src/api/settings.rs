use reqwest::Method;
use serde::Serialize;

use super::params::{QueryPairs, QueryParams, require};
use super::*;

/// Query for GET /helix/chat/settings.
#[derive(Debug, Clone, Default)]
pub struct GetChatSettingsParams {
    pub broadcaster_id: String,
    /// Set to receive the non-moderator chat delay fields. Needs
    /// `moderator:read:chat_settings` and must match the token's user.
    pub moderator_id: Option<String>,
}

impl QueryParams for GetChatSettingsParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query.push("broadcaster_id", &self.broadcaster_id).push_opt(
            "moderator_id",
            self.moderator_id.as_deref().filter(|v| !v.is_empty()),
        );
    }
}

/// Query and body for PATCH /helix/chat/settings.
///
/// Only the fields that are set are sent; the rest keep their current value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChatSettingsParams {
    #[serde(skip)]
    pub broadcaster_id: String,
    #[serde(skip)]
    pub moderator_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emote_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_mode_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_moderator_chat_delay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_moderator_chat_delay_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_mode_wait_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_chat_mode: Option<bool>,
}

impl QueryParams for UpdateChatSettingsParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query
            .push("broadcaster_id", &self.broadcaster_id)
            .push("moderator_id", &self.moderator_id);
    }
}

impl HelixClient {
    /// Get the broadcaster's chat settings.
    ///
    /// Optional scope: `moderator:read:chat_settings`
    pub async fn get_chat_settings(
        &self,
        token: &Token,
        params: &GetChatSettingsParams,
    ) -> Result<HelixResponse<ChatSettingsList>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        self.get(token, "/chat/settings", Some(params)).await
    }

    /// Update the broadcaster's chat settings and return the new values.
    ///
    /// Required scope: `moderator:manage:chat_settings`
    pub async fn update_chat_settings(
        &self,
        token: &Token,
        params: &UpdateChatSettingsParams,
    ) -> Result<HelixResponse<ChatSettingsList>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        require("moderator_id", &params.moderator_id)?;
        self.send_json(token, Method::PATCH, "/chat/settings", params)
            .await
    }
}
