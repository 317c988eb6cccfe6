//! Guild aggregate domain models.
//!
//! A `GuildAggregate` is what storage knows about a guild. A `GuildDetail` is the
//! aggregate merged with live Discord data, ready to be presented.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::guild::{CreatorDto, FileDto, GuildDto, MessageDto, QuotaDto, WebhookDto},
    server::{
        model::discord::{user_avatar_url, LiveGuild, LiveUser},
        util::parse::parse_snowflake_column,
    },
};

/// Stored guild settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub guild_id: u64,
    pub scope: bool,
    pub remove_one_time_message: bool,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

impl Guild {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Converted guild
    /// - `Err(DbErr::Custom)` - Stored guild_id is not a valid u64
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake_column(&entity.guild_id, "guild.guild_id")?,
            scope: entity.scope,
            remove_one_time_message: entity.remove_one_time_message,
            timezone: entity.timezone,
            created_at: entity.created_at,
        })
    }
}

/// Author of a message.
///
/// Holds the stored name and avatar until `overlay` replaces them with live values.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub discord_id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl Creator {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let discord_id = parse_snowflake_column(&entity.discord_id, "user.discord_id")?;

        Ok(Self {
            discord_id,
            avatar_url: entity
                .avatar
                .as_deref()
                .map(|hash| user_avatar_url(discord_id, hash)),
            name: entity.name,
        })
    }

    /// Replaces presentation fields with the live Discord profile.
    pub fn overlay(&mut self, live: &LiveUser) {
        self.name = live.name.clone();
        self.avatar_url = live.avatar_url.clone();
    }

    pub fn into_dto(self) -> CreatorDto {
        CreatorDto {
            id: self.discord_id,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}

/// File attached to a message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFile {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub size: i64,
}

impl MessageFile {
    pub fn from_entity(entity: entity::file::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
            size: entity.size,
        }
    }

    pub fn into_dto(self) -> FileDto {
        FileDto {
            id: self.id,
            name: self.name,
            url: self.url,
            size: self.size,
        }
    }
}

/// Message with its creator and attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMessage {
    pub id: i32,
    pub channel_id: u64,
    pub content: String,
    /// One-time messages are removed after their single use.
    pub one_time: bool,
    pub cron: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub creator: Creator,
    pub files: Vec<MessageFile>,
}

impl GuildMessage {
    /// Converts a message row together with its already-loaded relations.
    pub fn from_entity(
        entity: entity::message::Model,
        creator: Creator,
        files: Vec<MessageFile>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            channel_id: parse_snowflake_column(&entity.channel_id, "message.channel_id")?,
            content: entity.content,
            one_time: entity.one_time,
            cron: entity.cron,
            scheduled_at: entity.scheduled_at,
            created_at: entity.created_at,
            creator,
            files,
        })
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            channel_id: self.channel_id,
            content: self.content,
            one_time: self.one_time,
            cron: self.cron,
            scheduled_at: self.scheduled_at,
            created_at: self.created_at,
            creator: self.creator.into_dto(),
            files: self.files.into_iter().map(MessageFile::into_dto).collect(),
        }
    }
}

/// Webhook recorded in storage for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredWebhook {
    pub webhook_id: u64,
    pub channel_id: u64,
}

impl StoredWebhook {
    pub fn from_entity(entity: entity::webhook::Model) -> Result<Self, DbErr> {
        Ok(Self {
            webhook_id: parse_snowflake_column(&entity.webhook_id, "webhook.webhook_id")?,
            channel_id: parse_snowflake_column(&entity.channel_id, "webhook.channel_id")?,
        })
    }
}

/// Usage counter of a guild at a date.
#[derive(Debug, Clone, PartialEq)]
pub struct Quota {
    pub date: DateTime<Utc>,
    pub count: i32,
}

impl Quota {
    pub fn from_entity(entity: entity::quota::Model) -> Self {
        Self {
            date: entity.date,
            count: entity.count,
        }
    }

    pub fn into_dto(self) -> QuotaDto {
        QuotaDto {
            date: self.date,
            count: self.count,
        }
    }
}

/// Everything storage holds about a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildAggregate {
    pub guild: Guild,
    pub messages: Vec<GuildMessage>,
    pub webhooks: Vec<StoredWebhook>,
    /// Quotas of the current month only.
    pub quotas: Vec<Quota>,
}

/// Guild aggregate merged with live Discord data.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildDetail {
    pub guild: Guild,
    pub live: LiveGuild,
    pub messages: Vec<GuildMessage>,
    pub webhooks: Vec<WebhookDto>,
    pub quotas: Vec<Quota>,
}

impl GuildDetail {
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.guild.guild_id,
            name: self.live.name,
            icon_url: self.live.icon_url,
            scope: self.guild.scope,
            remove_one_time_message: self.guild.remove_one_time_message,
            timezone: self.guild.timezone,
            messages: self
                .messages
                .into_iter()
                .map(GuildMessage::into_dto)
                .collect(),
            webhooks: self.webhooks,
            quotas: self.quotas.into_iter().map(Quota::into_dto).collect(),
        }
    }
}
