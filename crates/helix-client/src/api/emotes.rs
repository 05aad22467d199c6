use super::params::{QueryPairs, QueryParams, require, require_count};
use super::*;

const MAX_EMOTE_SETS: usize = 25;

/// Query for GET /helix/chat/emotes.
#[derive(Debug, Clone, Default)]
pub struct GetChannelEmotesParams {
    pub broadcaster_id: String,
}

impl QueryParams for GetChannelEmotesParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query.push("broadcaster_id", &self.broadcaster_id);
    }
}

/// Query for GET /helix/chat/emotes/set.
#[derive(Debug, Clone, Default)]
pub struct GetEmoteSetsParams {
    /// 1 to 25 set IDs, sent as repeated `emote_set_id` pairs.
    pub emote_set_ids: Vec<String>,
}

impl QueryParams for GetEmoteSetsParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query.push_each("emote_set_id", &self.emote_set_ids);
    }
}

/// Query for GET /helix/chat/emotes/user.
#[derive(Debug, Clone, Default)]
pub struct GetUserEmotesParams {
    /// Must match the user in the access token.
    pub user_id: String,
    pub after: Option<String>,
    /// Guarantees follower emotes of this broadcaster are included.
    pub broadcaster_id: Option<String>,
}

impl QueryParams for GetUserEmotesParams {
    fn write_query(&self, query: &mut QueryPairs) {
        query
            .push("user_id", &self.user_id)
            .push_opt("after", self.after.as_deref().filter(|v| !v.is_empty()))
            .push_opt(
                "broadcaster_id",
                self.broadcaster_id.as_deref().filter(|v| !v.is_empty()),
            );
    }
}

impl HelixClient {
    /// Get the broadcaster's custom emotes.
    pub async fn get_channel_emotes(
        &self,
        token: &Token,
        params: &GetChannelEmotesParams,
    ) -> Result<HelixResponse<Emotes>, HelixError> {
        require("broadcaster_id", &params.broadcaster_id)?;
        self.get(token, "/chat/emotes", Some(params)).await
    }

    /// Get the emotes available in every channel.
    pub async fn get_global_emotes(&self, token: &Token) -> Result<HelixResponse<Emotes>, HelixError> {
        self.get::<_, ()>(token, "/chat/emotes/global", None).await
    }

    /// Get the emotes of one or more emote sets.
    pub async fn get_emote_sets(
        &self,
        token: &Token,
        params: &GetEmoteSetsParams,
    ) -> Result<HelixResponse<EmotesWithOwner>, HelixError> {
        let count = params
            .emote_set_ids
            .iter()
            .filter(|id| !id.is_empty())
            .count();
        require_count("emote_set_id", count, 1, MAX_EMOTE_SETS)?;
        self.get(token, "/chat/emotes/set", Some(params)).await
    }

    /// Get one page of emotes the user may use in any chat.
    ///
    /// Required scope: `user:read:emotes`
    pub async fn get_user_emotes(
        &self,
        token: &Token,
        params: &GetUserEmotesParams,
    ) -> Result<HelixResponse<EmotesWithOwner>, HelixError> {
        require("user_id", &params.user_id)?;
        let resp: HelixResponse<EmotesWithOwner> =
            self.get(token, "/chat/emotes/user", Some(params)).await?;
        tracing::debug!(
            count = resp.data.emotes.len(),
            has_more = resp.envelope.has_more(),
            "Fetched user emotes"
        );
        Ok(resp)
    }
}
