//! Message factory for creating test messages and their attachments.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
///
/// The guild and creator must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let message = MessageFactory::new(&db, &guild.guild_id, &user.discord_id)
///     .content("Hello")
///     .one_time(true)
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    creator_id: String,
    channel_id: String,
    content: String,
    one_time: bool,
    cron: Option<String>,
    scheduled_at: Option<DateTime<Utc>>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented counter value
    /// - content: `"Message {id}"`
    /// - one_time: `false`
    /// - cron: `None`
    /// - scheduled_at: `None`
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, creator_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            creator_id: creator_id.to_string(),
            channel_id: id.to_string(),
            content: format!("Message {}", id),
            one_time: false,
            cron: None,
            scheduled_at: None,
        }
    }

    /// Sets the message text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Marks the message as one-time.
    pub fn one_time(mut self, one_time: bool) -> Self {
        self.one_time = one_time;
        self
    }

    /// Sets the cron expression for recurring messages.
    pub fn cron(mut self, cron: Option<String>) -> Self {
        self.cron = cron;
        self
    }

    /// Sets the scheduled date.
    pub fn scheduled_at(mut self, scheduled_at: Option<DateTime<Utc>>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            creator_id: ActiveValue::Set(self.creator_id),
            channel_id: ActiveValue::Set(self.channel_id),
            content: ActiveValue::Set(self.content),
            one_time: ActiveValue::Set(self.one_time),
            cron: ActiveValue::Set(self.cron),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values.
pub async fn create_message(
    db: &DatabaseConnection,
    guild_id: &str,
    creator_id: &str,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, guild_id, creator_id).build().await
}

/// Attaches a file to an existing message.
pub async fn create_file(
    db: &DatabaseConnection,
    message_id: i32,
    name: &str,
) -> Result<entity::file::Model, DbErr> {
    entity::file::ActiveModel {
        message_id: ActiveValue::Set(message_id),
        name: ActiveValue::Set(name.to_string()),
        url: ActiveValue::Set(format!("https://files.example.com/{}/{}", message_id, name)),
        size: ActiveValue::Set(1024),
        ..Default::default()
    }
    .insert(db)
    .await
}
