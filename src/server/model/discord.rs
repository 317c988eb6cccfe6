//! Live Discord objects resolved through the bot.
//!
//! These are never persisted; they overlay stored records at read time.

use crate::model::guild::{GuildMemberDto, WebhookDto};

const CDN_URL: &str = "https://cdn.discordapp.com";

/// Builds the CDN URL of a user avatar from its hash.
pub fn user_avatar_url(user_id: u64, avatar_hash: &str) -> String {
    format!("{}/avatars/{}/{}.png", CDN_URL, user_id, avatar_hash)
}

/// Builds the CDN URL of a guild icon from its hash.
pub fn guild_icon_url(guild_id: u64, icon_hash: &str) -> String {
    format!("{}/icons/{}/{}.png", CDN_URL, guild_id, icon_hash)
}

/// Current Discord profile of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveUser {
    pub id: u64,
    /// Global display name, falling back to the username.
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Current Discord state of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveGuild {
    pub id: u64,
    pub name: String,
    pub icon_url: Option<String>,
}

/// Webhook as it currently exists on Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveWebhook {
    pub id: u64,
    pub name: Option<String>,
    pub channel_id: Option<u64>,
    pub avatar_url: Option<String>,
}

impl LiveWebhook {
    /// Converts to a DTO, using the stored channel when Discord omits it.
    pub fn into_dto(self, stored_channel_id: u64) -> WebhookDto {
        WebhookDto {
            id: self.id,
            name: self.name,
            channel_id: self.channel_id.unwrap_or(stored_channel_id),
            avatar_url: self.avatar_url,
        }
    }
}

/// Guild member matched by a member search.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveMember {
    pub id: u64,
    /// Nickname when set, otherwise the user's display name.
    pub display_name: String,
    pub nickname: Option<String>,
}

impl LiveMember {
    pub fn into_dto(self) -> GuildMemberDto {
        GuildMemberDto {
            name: self.display_name,
            nickname: self.nickname,
            id: self.id,
        }
    }
}
