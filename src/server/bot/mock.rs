//! In-memory `DiscordPlatform` for service and controller tests.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;
use serenity::async_trait;

use crate::server::{
    bot::platform::DiscordPlatform,
    error::AppError,
    model::discord::{LiveGuild, LiveMember, LiveUser, LiveWebhook},
};

#[derive(Default)]
pub struct MockDiscord {
    users: HashMap<u64, LiveUser>,
    guilds: HashMap<u64, LiveGuild>,
    webhooks: HashMap<u64, Vec<LiveWebhook>>,
    /// Members per guild, with the username the search matches against.
    members: HashMap<u64, Vec<(String, LiveMember)>>,
    pub user_lookups: AtomicUsize,
    pub member_searches: AtomicUsize,
    pub last_search: Mutex<Option<(String, u64)>>,
}

impl MockDiscord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: u64, name: &str, avatar_url: Option<&str>) -> Self {
        self.users.insert(
            id,
            LiveUser {
                id,
                name: name.to_string(),
                avatar_url: avatar_url.map(str::to_string),
            },
        );
        self
    }

    pub fn with_guild(mut self, id: u64, name: &str) -> Self {
        self.guilds.insert(
            id,
            LiveGuild {
                id,
                name: name.to_string(),
                icon_url: None,
            },
        );
        self
    }

    pub fn with_webhook(mut self, guild_id: u64, id: u64, channel_id: u64) -> Self {
        self.webhooks.entry(guild_id).or_default().push(LiveWebhook {
            id,
            name: Some(format!("Webhook {}", id)),
            channel_id: Some(channel_id),
            avatar_url: None,
        });
        self
    }

    pub fn with_member(mut self, guild_id: u64, id: u64, name: &str, nickname: Option<&str>) -> Self {
        self.members.entry(guild_id).or_default().push((
            name.to_string(),
            LiveMember {
                id,
                display_name: nickname.unwrap_or(name).to_string(),
                nickname: nickname.map(str::to_string),
            },
        ));
        self
    }

    pub fn user_lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }

    pub fn member_searches(&self) -> usize {
        self.member_searches.load(Ordering::SeqCst)
    }
}

fn not_found(kind: &str, id: u64) -> AppError {
    AppError::NotFound(format!("Discord {} {} not found", kind, id))
}

#[async_trait]
impl DiscordPlatform for MockDiscord {
    async fn get_user(&self, user_id: u64) -> Result<LiveUser, AppError> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| not_found("user", user_id))
    }

    async fn get_guild(&self, guild_id: u64) -> Result<LiveGuild, AppError> {
        self.guilds
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| not_found("guild", guild_id))
    }

    async fn fetch_webhooks(&self, guild_id: u64) -> Result<Vec<LiveWebhook>, AppError> {
        Ok(self.webhooks.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn search_members(
        &self,
        guild_id: u64,
        query: &str,
        limit: u64,
    ) -> Result<Vec<LiveMember>, AppError> {
        self.member_searches.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock() = Some((query.to_string(), limit));

        let query = query.to_lowercase();
        Ok(self
            .members
            .get(&guild_id)
            .map(|members| {
                members
                    .iter()
                    .filter(|(username, member)| {
                        username.to_lowercase().starts_with(&query)
                            || member
                                .nickname
                                .as_deref()
                                .is_some_and(|nick| nick.to_lowercase().starts_with(&query))
                    })
                    .take(limit as usize)
                    .map(|(_, member)| member.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}
