use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_guild::UserGuildRepository},
    error::AppError,
    model::{membership::UserGuild, user::User},
    service::cache::CacheService,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a CacheService,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a CacheService) -> Self {
        Self { db, cache }
    }

    /// Gets a user by Discord ID.
    pub async fn get_user(&self, user_id: u64) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?)
    }

    /// Gets the guild memberships of a user, cache first.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(Arc<Vec<UserGuild>>)` - Memberships with their bot presence flag
    /// - `Err(AppError::DbErr)` - Database error on a cache miss
    pub async fn get_user_guilds(&self, user_id: u64) -> Result<Arc<Vec<UserGuild>>, AppError> {
        if let Some(guilds) = self.cache.user_guilds.get(&user_id).await {
            return Ok(guilds);
        }

        let guilds = Arc::new(
            UserGuildRepository::new(self.db)
                .get_by_user(user_id)
                .await?,
        );
        self.cache.user_guilds.insert(user_id, guilds.clone()).await;

        Ok(guilds)
    }
}
