use super::params::{QueryPairs, QueryParams, require};
use super::*;

/// Query for GET /helix/chat/chatters.
#[derive(Debug, Clone, Default)]
pub struct GetChatChattersParams {
    pub broadcaster_id: String,
    /// Must match the user in the access token.
    pub moderator_id: String,
    pub after: Option<String>,
    /// Page size, 1-1000. Zero leaves the server default.
    pub first: u32,
}

impl QueryParams for GetChatChattersParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query
            .push("broadcaster_id", &self.broadcaster_id)
            .push("moderator_id", &self.moderator_id)
            .push_opt("after", self.after.as_deref().filter(|v| !v.is_empty()))
            .push_nonzero("first", self.first);
    }
}

impl HelixClient {
    /// Get one page of users connected to the broadcaster's chat.
    ///
    /// Required scope: `moderator:read:chatters`
    pub async fn get_chat_chatters(
        &self,
        token: &Token,
        params: &GetChatChattersParams,
    ) -> Result<HelixResponse<Chatters>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        require("moderator_id", &params.moderator_id)?;
        self.get(token, "/chat/chatters", Some(params)).await
    }
}
