//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::UserDto,
    server::{model::discord::user_avatar_url, util::parse::parse_snowflake_column},
};

/// Application user identified by their Discord ID.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Name captured at last login.
    pub name: String,
    /// Avatar hash captured at last login.
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.discord_id,
            avatar_url: self
                .avatar
                .as_deref()
                .map(|hash| user_avatar_url(self.discord_id, hash)),
            name: self.name,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored discord_id is not a valid u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            discord_id: parse_snowflake_column(&entity.discord_id, "user.discord_id")?,
            name: entity.name,
            avatar: entity.avatar,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for upserting a user during login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Name of the user.
    pub name: String,
    /// Avatar hash of the user.
    pub avatar: Option<String>,
}
