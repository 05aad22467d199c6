use reqwest::Method;
use serde::Serialize;

use super::params::{QueryPairs, QueryParams, require};
use super::*;

/// Query and body for POST /helix/chat/announcements.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendChatAnnouncementParams {
    #[serde(skip)]
    pub broadcaster_id: String,
    /// Must match the user in the access token.
    #[serde(skip)]
    pub moderator_id: String,
    /// Up to 500 characters; Twitch truncates longer messages.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<AnnouncementColor>,
}

impl QueryParams for SendChatAnnouncementParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query
            .push("broadcaster_id", &self.broadcaster_id)
            .push("moderator_id", &self.moderator_id);
    }
}

/// Body for POST /helix/chat/messages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendChatMessageParams {
    pub broadcaster_id: String,
    /// Must match the user in the access token.
    pub sender_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parent_message_id: Option<String>,
}

impl QueryParams for SendChatMessageParams {
    fn write_query(&self, _query: &mut QueryPairs) {}
}

/// Query for POST /helix/chat/shoutouts.
#[derive(Debug, Clone, Default)]
pub struct SendShoutoutParams {
    pub from_broadcaster_id: String,
    pub to_broadcaster_id: String,
    pub moderator_id: String,
}

impl QueryParams for SendShoutoutParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query
            .push("from_broadcaster_id", &self.from_broadcaster_id)
            .push("to_broadcaster_id", &self.to_broadcaster_id)
            .push("moderator_id", &self.moderator_id);
    }
}

impl HelixClient {
    /// Send an announcement to the broadcaster's chat room.
    ///
    /// Required scope: `moderator:manage:announcements`
    pub async fn send_chat_announcement(
        &self,
        token: &Token,
        params: &SendChatAnnouncementParams,
    ) -> Result<HelixResponse<NoContent>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        require("moderator_id", &params.moderator_id)?;
        require("message", &params.message)?;
        self.send_json(token, Method::POST, "/chat/announcements", params)
            .await
    }

    /// Send a message to the broadcaster's chat room as `sender_id`.
    ///
    /// Required scope: `user:write:chat`
    pub async fn send_chat_message(
        &self,
        token: &Token,
        params: &SendChatMessageParams,
    ) -> Result<HelixResponse<SentMessages>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        require("sender_id", &params.sender_id)?;
        require("message", &params.message)?;
        self.send_json(token, Method::POST, "/chat/messages", params)
            .await
    }

    /// Shout out another broadcaster in the `from_broadcaster_id` chat.
    ///
    /// Required scope: `moderator:manage:shoutouts`
    pub async fn send_shoutout(
        &self,
        token: &Token,
        params: &SendShoutoutParams,
    ) -> Result<HelixResponse<NoContent>, HelixError> {
        require("from_broadcaster_id", &params.from_broadcaster_id)?;
        require("to_broadcaster_id", &params.to_broadcaster_id)?;
        require("moderator_id", &params.moderator_id)?;
        self.send_without_body(token, Method::POST, "/chat/shoutouts", params)
            .await
    }
}
