use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Value,
};

use crate::server::{model::guild::Guild, util::timezone::DEFAULT_TIMEZONE};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures a guild row exists for a guild the bot is in.
    ///
    /// New guilds get default settings; an existing guild keeps its settings.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Guild)`: The existing or newly created guild
    /// - `Err(DbErr)`: Database error during insert or read back
    pub async fn upsert(&self, guild_id: u64) -> Result<Guild, DbErr> {
        entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            scope: ActiveValue::Set(false),
            remove_one_time_message: ActiveValue::Set(false),
            timezone: ActiveValue::Set(DEFAULT_TIMEZONE.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild {}", guild_id)))
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(Guild))`: Guild found in database
    /// - `Ok(None)`: Guild not found (bot not in this guild)
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<Guild>, DbErr> {
        entity::prelude::Guild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(Guild::from_entity)
            .transpose()
    }

    /// Returns which of the given guild IDs have a stored guild.
    pub async fn find_existing_ids(&self, guild_ids: &[u64]) -> Result<Vec<u64>, DbErr> {
        if guild_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Guild::find()
            .filter(
                entity::guild::Column::GuildId
                    .is_in(guild_ids.iter().map(|id| id.to_string())),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(|guild| Guild::from_entity(guild).map(|g| g.guild_id))
            .collect()
    }

    /// Sets the scope flag.
    ///
    /// # Returns
    /// - `Ok(true)`: Guild updated
    /// - `Ok(false)`: No guild with this ID
    /// - `Err(DbErr)`: Database error during update
    pub async fn update_scope(&self, guild_id: u64, scope: bool) -> Result<bool, DbErr> {
        self.update_column(guild_id, entity::guild::Column::Scope, scope.into())
            .await
    }

    /// Sets whether one-time messages are removed after use.
    ///
    /// # Returns
    /// - `Ok(true)`: Guild updated
    /// - `Ok(false)`: No guild with this ID
    /// - `Err(DbErr)`: Database error during update
    pub async fn update_remove_one_time_message(
        &self,
        guild_id: u64,
        remove: bool,
    ) -> Result<bool, DbErr> {
        self.update_column(
            guild_id,
            entity::guild::Column::RemoveOneTimeMessage,
            remove.into(),
        )
        .await
    }

    /// Sets the guild timezone. The value must already be validated.
    ///
    /// # Returns
    /// - `Ok(true)`: Guild updated
    /// - `Ok(false)`: No guild with this ID
    /// - `Err(DbErr)`: Database error during update
    pub async fn update_timezone(&self, guild_id: u64, timezone: &str) -> Result<bool, DbErr> {
        self.update_column(
            guild_id,
            entity::guild::Column::Timezone,
            timezone.to_string().into(),
        )
        .await
    }

    /// Deletes a guild; messages, files, webhooks and quotas cascade.
    pub async fn delete(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::Guild::delete_by_id(guild_id.to_string())
            .exec(self.db)
            .await?;
        Ok(())
    }

    // Single-column UPDATE: concurrent patches of different fields never clobber each other.
    async fn update_column(
        &self,
        guild_id: u64,
        column: entity::guild::Column,
        value: Value,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Guild::update_many()
            .col_expr(column, Expr::value(value))
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
