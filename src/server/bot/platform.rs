//! Live Discord lookups used by request handlers.
//!
//! `DiscordPlatform` is the seam between services and the Discord HTTP API so that
//! services can be exercised against an in-memory implementation in tests.

use std::sync::Arc;

use serenity::all::{GuildId, UserId};
use serenity::http::Http;
use serenity::async_trait;

use crate::server::{
    error::AppError,
    model::discord::{user_avatar_url, LiveGuild, LiveMember, LiveUser, LiveWebhook},
};

#[async_trait]
pub trait DiscordPlatform: Send + Sync {
    /// Fetches the current profile of a user.
    async fn get_user(&self, user_id: u64) -> Result<LiveUser, AppError>;

    /// Fetches the current name and icon of a guild.
    async fn get_guild(&self, guild_id: u64) -> Result<LiveGuild, AppError>;

    /// Lists the webhooks currently configured in a guild.
    async fn fetch_webhooks(&self, guild_id: u64) -> Result<Vec<LiveWebhook>, AppError>;

    /// Searches guild members whose username or nickname starts with `query`.
    ///
    /// Returns at most `limit` members.
    async fn search_members(
        &self,
        guild_id: u64,
        query: &str,
        limit: u64,
    ) -> Result<Vec<LiveMember>, AppError>;
}

/// `DiscordPlatform` backed by the bot's serenity HTTP client.
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordPlatform for SerenityPlatform {
    async fn get_user(&self, user_id: u64) -> Result<LiveUser, AppError> {
        let user = self.http.get_user(UserId::new(user_id)).await?;

        Ok(LiveUser {
            id: user.id.get(),
            avatar_url: user.avatar_url(),
            name: user.global_name.unwrap_or(user.name),
        })
    }

    async fn get_guild(&self, guild_id: u64) -> Result<LiveGuild, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(LiveGuild {
            id: guild.id.get(),
            icon_url: guild.icon_url(),
            name: guild.name,
        })
    }

    async fn fetch_webhooks(&self, guild_id: u64) -> Result<Vec<LiveWebhook>, AppError> {
        let webhooks = self.http.get_guild_webhooks(GuildId::new(guild_id)).await?;

        Ok(webhooks
            .into_iter()
            .map(|webhook| {
                let id = webhook.id.get();
                LiveWebhook {
                    id,
                    name: webhook.name,
                    channel_id: webhook.channel_id.map(|channel| channel.get()),
                    avatar_url: webhook
                        .avatar
                        .map(|hash| user_avatar_url(id, &hash.to_string())),
                }
            })
            .collect())
    }

    async fn search_members(
        &self,
        guild_id: u64,
        query: &str,
        limit: u64,
    ) -> Result<Vec<LiveMember>, AppError> {
        let members = self
            .http
            .search_guild_members(GuildId::new(guild_id), query, Some(limit))
            .await?;

        Ok(members
            .into_iter()
            .map(|member| LiveMember {
                id: member.user.id.get(),
                display_name: member.display_name().to_string(),
                nickname: member.nick,
            })
            .collect())
    }
}
