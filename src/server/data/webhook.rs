use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::guild::StoredWebhook;

pub struct WebhookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebhookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the webhooks recorded for a guild.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<StoredWebhook>, DbErr> {
        entity::prelude::Webhook::find()
            .filter(entity::webhook::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(StoredWebhook::from_entity)
            .collect()
    }
}
