use serde::{Deserialize, Serialize};

/// Chatter entry from GET /helix/chat/chatters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chatter {
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
}

/// Payload of GET /helix/chat/chatters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chatters {
    #[serde(rename = "data")]
    pub chatters: Vec<Chatter>,
    /// Total number of users in chat, across all pages.
    #[serde(default)]
    pub total: u64,
}

/// One image version of a chat badge set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeVersion {
    pub id: String,
    pub image_url_1x: String,
    pub image_url_2x: String,
    pub image_url_4x: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub click_action: Option<String>,
    #[serde(default)]
    pub click_url: Option<String>,
}

/// Chat badge set from GET /helix/chat/badges and /helix/chat/badges/global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBadge {
    pub set_id: String,
    pub versions: Vec<BadgeVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatBadges {
    #[serde(rename = "data")]
    pub badges: Vec<ChatBadge>,
}

/// Image URLs at different scales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteImages {
    pub url_1x: String,
    pub url_2x: String,
    pub url_4x: String,
}

/// A single Twitch emote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emote {
    pub id: String,
    pub name: String,
    // `chat/emotes/user` doesn't include `images`; build URLs from `template` instead.
    #[serde(default)]
    pub images: EmoteImages,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub emote_type: String,
    #[serde(default)]
    pub emote_set_id: String,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub scale: Vec<String>,
    #[serde(default)]
    pub theme_mode: Vec<String>,
}

/// Emote plus the ID of the broadcaster who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteWithOwner {
    #[serde(flatten)]
    pub emote: Emote,
    #[serde(default)]
    pub owner_id: String,
}

/// Payload of GET /helix/chat/emotes and /helix/chat/emotes/global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotes {
    #[serde(rename = "data")]
    pub emotes: Vec<Emote>,
    /// CDN URL template with `{{id}}`, `{{format}}`, `{{theme_mode}}` and `{{scale}}` slots.
    #[serde(default)]
    pub template: String,
}

/// Payload of GET /helix/chat/emotes/set and /helix/chat/emotes/user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotesWithOwner {
    #[serde(rename = "data")]
    pub emotes: Vec<EmoteWithOwner>,
    #[serde(default)]
    pub template: String,
}

impl Emotes {
    /// Fill the URL template for one emote variant.
    pub fn image_url(&self, emote_id: &str, format: &str, theme_mode: &str, scale: &str) -> String {
        fill_template(&self.template, emote_id, format, theme_mode, scale)
    }
}

impl EmotesWithOwner {
    pub fn image_url(&self, emote_id: &str, format: &str, theme_mode: &str, scale: &str) -> String {
        fill_template(&self.template, emote_id, format, theme_mode, scale)
    }
}

fn fill_template(template: &str, id: &str, format: &str, theme_mode: &str, scale: &str) -> String {
    template
        .replace("{{id}}", id)
        .replace("{{format}}", format)
        .replace("{{theme_mode}}", theme_mode)
        .replace("{{scale}}", scale)
}

/// Chat settings from GET/PATCH /helix/chat/settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub broadcaster_id: String,
    #[serde(default)]
    pub emote_mode: bool,
    #[serde(default)]
    pub follower_mode: bool,
    /// Minutes a user must follow before chatting. `None` when follower mode is off.
    #[serde(default)]
    pub follower_mode_duration: Option<u32>,
    #[serde(default)]
    pub slow_mode: bool,
    /// Seconds between messages. `None` when slow mode is off.
    #[serde(default)]
    pub slow_mode_wait_time: Option<u32>,
    #[serde(default)]
    pub subscriber_mode: bool,
    #[serde(default)]
    pub unique_chat_mode: bool,
    // The remaining fields are only returned to a moderator with
    // `moderator:read:chat_settings`.
    #[serde(default)]
    pub moderator_id: Option<String>,
    #[serde(default)]
    pub non_moderator_chat_delay: Option<bool>,
    #[serde(default)]
    pub non_moderator_chat_delay_duration: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettingsList {
    #[serde(rename = "data")]
    pub settings: Vec<ChatSettings>,
}

impl ChatSettingsList {
    /// Helix returns exactly one entry per broadcaster.
    pub fn first(&self) -> Option<&ChatSettings> {
        self.settings.first()
    }
}

/// User chat color from GET /helix/chat/color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatColor {
    pub user_id: String,
    pub user_name: String,
    pub user_login: String,
    /// Hex color, empty if the user never set one.
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatColors {
    #[serde(rename = "data")]
    pub colors: Vec<ChatColor>,
}

/// Why a chat message was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropReason {
    pub code: String,
    pub message: String,
}

/// Result of POST /helix/chat/messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub message_id: String,
    pub is_sent: bool,
    #[serde(default)]
    pub drop_reason: Option<DropReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessages {
    #[serde(rename = "data")]
    pub messages: Vec<SentMessage>,
}

/// Payload of endpoints that answer 204 No Content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoContent {}

/// Accent color of a chat announcement. `Primary` uses the channel's accent color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementColor {
    #[default]
    Primary,
    Blue,
    Green,
    Orange,
    Purple,
}
