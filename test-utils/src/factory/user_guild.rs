//! Membership factory for creating user-guild relationships.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild memberships.
///
/// The user must already exist. The guild does not need to exist, mirroring memberships
/// of guilds the bot has not joined.
///
/// # Example
///
/// ```rust,ignore
/// let membership = UserGuildFactory::new(&db, &user.discord_id, "42")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserGuildFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    name: String,
    icon: Option<String>,
    role: String,
}

impl<'a> UserGuildFactory<'a> {
    /// Creates a new UserGuildFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Guild {guild_id}"`
    /// - icon: `None`
    /// - role: `"member"`
    pub fn new(db: &'a DatabaseConnection, user_id: &str, guild_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            guild_id: guild_id.to_string(),
            name: format!("Guild {}", guild_id),
            icon: None,
            role: "member".to_string(),
        }
    }

    /// Sets the guild display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored role (`"member"` or `"admin"`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the membership entity into the database.
    pub async fn build(self) -> Result<entity::user_guild::Model, DbErr> {
        entity::user_guild::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            icon: ActiveValue::Set(self.icon),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a membership with the given role.
pub async fn create_user_guild(
    db: &DatabaseConnection,
    user_id: &str,
    guild_id: &str,
    role: &str,
) -> Result<entity::user_guild::Model, DbErr> {
    UserGuildFactory::new(db, user_id, guild_id)
        .role(role)
        .build()
        .await
}
