use super::params::{QueryPairs, QueryParams, require};
use super::*;

/// Query for GET /helix/chat/badges.
#[derive(Debug, Clone, Default)]
pub struct GetChannelChatBadgesParams {
    pub broadcaster_id: String,
}

impl QueryParams for GetChannelChatBadgesParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query.push("broadcaster_id", &self.broadcaster_id);
    }
}

impl HelixClient {
    /// Get the broadcaster's custom chat badges.
    pub async fn get_channel_chat_badges(
        &self,
        token: &Token,
        params: &GetChannelChatBadgesParams,
    ) -> Result<HelixResponse<ChatBadges>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        self.get(token, "/chat/badges", Some(params)).await
    }

    /// Get the chat badges available in every channel.
    pub async fn get_global_chat_badges(
        &self,
        token: &Token,
    ) -> Result<HelixResponse<ChatBadges>, HelixError> {
        self.get::<_, ()>(token, "/chat/badges/global", None).await
    }
}
