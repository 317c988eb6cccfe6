use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::guild::{Creator, GuildMessage, MessageFile};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all messages of a guild with their creator and attached files.
    ///
    /// Loads messages, then their files and creators in one query each, and
    /// assembles them in memory. Newest messages come first.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<GuildMessage>)`: Messages of the guild (empty if none)
    /// - `Err(DbErr)`: Database error, or a message whose creator is missing
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<GuildMessage>, DbErr> {
        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let message_ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
        let mut files_by_message: HashMap<i32, Vec<MessageFile>> = HashMap::new();
        for file in entity::prelude::File::find()
            .filter(entity::file::Column::MessageId.is_in(message_ids))
            .order_by_asc(entity::file::Column::Id)
            .all(self.db)
            .await?
        {
            files_by_message
                .entry(file.message_id)
                .or_default()
                .push(MessageFile::from_entity(file));
        }

        let mut creator_ids: Vec<String> = messages.iter().map(|m| m.creator_id.clone()).collect();
        creator_ids.sort();
        creator_ids.dedup();
        let creators: HashMap<String, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.is_in(creator_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.discord_id.clone(), user))
            .collect();

        messages
            .into_iter()
            .map(|message| {
                let creator = creators.get(&message.creator_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Creator {} of message {}",
                        message.creator_id, message.id
                    ))
                })?;
                let files = files_by_message.remove(&message.id).unwrap_or_default();

                GuildMessage::from_entity(message, Creator::from_entity(creator)?, files)
            })
            .collect()
    }
}
