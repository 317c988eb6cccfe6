//! Guild membership and role models used by the role guard.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;
use serenity::all::Permissions;

use crate::{
    model::user::UserGuildDto,
    server::{model::discord::guild_icon_url, util::parse::parse_snowflake_column},
};

/// Role of a user within a guild, ordered by privilege.
///
/// `Admin` satisfies any `Member` requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GuildRole {
    Member,
    Admin,
}

impl GuildRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    /// Derives the role from the OAuth guild listing.
    ///
    /// Owners and users holding ADMINISTRATOR or MANAGE_GUILD administer the guild.
    pub fn from_permissions(owner: bool, permissions: Permissions) -> Self {
        if owner || permissions.administrator() || permissions.manage_guild() {
            Self::Admin
        } else {
            Self::Member
        }
    }

    /// Whether this role grants access to operations requiring `required`.
    pub fn satisfies(&self, required: GuildRole) -> bool {
        *self >= required
    }
}

impl fmt::Display for GuildRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuildRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown guild role '{}'", other)),
        }
    }
}

/// A guild the user belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct UserGuild {
    pub guild_id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub role: GuildRole,
    /// Whether the bot has joined this guild.
    pub bot_present: bool,
}

impl UserGuild {
    pub fn into_dto(self) -> UserGuildDto {
        UserGuildDto {
            id: self.guild_id,
            icon_url: self
                .icon
                .as_deref()
                .map(|hash| guild_icon_url(self.guild_id, hash)),
            name: self.name,
            role: self.role.to_string(),
            bot_present: self.bot_present,
        }
    }

    /// Converts a membership row at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Stored membership
    /// - `bot_present` - Whether a guild row exists for this guild
    ///
    /// # Returns
    /// - `Ok(UserGuild)` - Converted membership
    /// - `Err(DbErr::Custom)` - Stored guild_id or role is invalid
    pub fn from_entity(entity: entity::user_guild::Model, bot_present: bool) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake_column(&entity.guild_id, "user_guild.guild_id")?,
            name: entity.name,
            icon: entity.icon,
            role: entity.role.parse::<GuildRole>().map_err(DbErr::Custom)?,
            bot_present,
        })
    }
}

/// Membership captured from the OAuth guild listing at login.
#[derive(Debug, Clone)]
pub struct UserGuildParam {
    pub guild_id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub role: GuildRole,
}
