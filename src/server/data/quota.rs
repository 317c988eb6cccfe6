use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::guild::Quota;

pub struct QuotaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuotaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the quota records of a guild dated at or after `since`, oldest first.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `since`: Inclusive lower bound, usually the start of the current month
    pub async fn get_since(
        &self,
        guild_id: u64,
        since: DateTime<Utc>,
    ) -> Result<Vec<Quota>, DbErr> {
        let quotas = entity::prelude::Quota::find()
            .filter(entity::quota::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::quota::Column::Date.gte(since))
            .order_by_asc(entity::quota::Column::Date)
            .all(self.db)
            .await?;

        Ok(quotas.into_iter().map(Quota::from_entity).collect())
    }
}
