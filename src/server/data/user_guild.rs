use std::collections::HashSet;

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::guild::GuildRepository,
    model::membership::{UserGuild, UserGuildParam},
};

pub struct UserGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces all guild memberships of a user with the provided list
    ///
    /// Runs in a transaction so readers never observe a partially synced list.
    ///
    /// # Arguments
    /// - `user_id`: Discord user ID
    /// - `memberships`: Guilds from the user's OAuth guild listing
    ///
    /// # Returns
    /// - `Ok(())`: Memberships replaced
    /// - `Err(DbErr)`: Database error, the previous memberships are kept
    pub async fn replace_for_user(
        &self,
        user_id: u64,
        memberships: Vec<UserGuildParam>,
    ) -> Result<(), DbErr> {
        let user_id = user_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::UserGuild::delete_many()
            .filter(entity::user_guild::Column::UserId.eq(user_id.as_str()))
            .exec(&txn)
            .await?;

        if !memberships.is_empty() {
            let models = memberships
                .into_iter()
                .map(|param| entity::user_guild::ActiveModel {
                    user_id: ActiveValue::Set(user_id.clone()),
                    guild_id: ActiveValue::Set(param.guild_id.to_string()),
                    name: ActiveValue::Set(param.name),
                    icon: ActiveValue::Set(param.icon),
                    role: ActiveValue::Set(param.role.as_str().to_string()),
                    ..Default::default()
                });

            entity::prelude::UserGuild::insert_many(models)
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }

    /// Gets the guild memberships of a user
    ///
    /// Each membership is flagged with whether the bot has joined that guild.
    ///
    /// # Arguments
    /// - `user_id`: Discord user ID
    ///
    /// # Returns
    /// - `Ok(Vec<UserGuild>)`: Memberships ordered by guild name
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<UserGuild>, DbErr> {
        let memberships = entity::prelude::UserGuild::find()
            .filter(entity::user_guild::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::user_guild::Column::Name)
            .all(self.db)
            .await?;

        let guild_ids = memberships
            .iter()
            .filter_map(|membership| membership.guild_id.parse::<u64>().ok())
            .collect::<Vec<_>>();
        let present: HashSet<String> = GuildRepository::new(self.db)
            .find_existing_ids(&guild_ids)
            .await?
            .into_iter()
            .map(|id| id.to_string())
            .collect();

        memberships
            .into_iter()
            .map(|membership| {
                let bot_present = present.contains(&membership.guild_id);
                UserGuild::from_entity(membership, bot_present)
            })
            .collect()
    }
}
