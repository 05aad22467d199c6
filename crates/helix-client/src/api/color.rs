use reqwest::Method;

use super::params::{QueryPairs, QueryParams, require, require_count};
use super::*;

const MAX_COLOR_USERS: usize = 100;

/// Query for GET /helix/chat/color.
#[derive(Debug, Clone, Default)]
pub struct GetUserChatColorParams {
    /// 1 to 100 user IDs, sent as repeated `user_id` pairs.
    pub user_ids: Vec<String>,
}

impl QueryParams for GetUserChatColorParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query.push_each("user_id", &self.user_ids);
    }
}

/// Query for PUT /helix/chat/color.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserChatColorParams {
    /// Must match the user in the access token.
    pub user_id: String,
    /// A named color (`blue`, `hot_pink`, ...) or, for Turbo and Prime users, a hex code.
    pub color: String,
}

impl QueryParams for UpdateUserChatColorParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query
            .push("user_id", &self.user_id)
            .push("color", &self.color);
    }
}

impl HelixClient {
    /// Get the chat colors of up to 100 users.
    pub async fn get_user_chat_color(
        &self,
        token: &Token,
        params: &GetUserChatColorParams,
    ) -> Result<HelixResponse<ChatColors>, HelixError> {
        let count = params.user_ids.iter().filter(|id| !id.is_empty()).count();
        require_count("user_id", count, 1, MAX_COLOR_USERS)?;
        self.get(token, "/chat/color", Some(params)).await
    }

    /// Change the chat color of the token's user.
    ///
    /// Required scope: `user:manage:chat_color`
    pub async fn update_user_chat_color(
        &self,
        token: &Token,
        params: &UpdateUserChatColorParams,
    ) -> Result<HelixResponse<NoContent>, HelixError> {
        require("user_id", &params.user_id)?;
        require("color", &params.color)?;
        self.send_without_body(token, Method::PUT, "/chat/color", params)
            .await
    }
}
