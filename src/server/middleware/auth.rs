//! Session and guild role guards.
//!
//! Every protected handler starts with
//! `AuthGuard::new(..).require(&[..]).await?`. The session stage resolves the stored
//! user, then the role stage checks each requested permission against the user's
//! guild memberships. The first failing stage rejects the request before the handler
//! touches any data.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        membership::{GuildRole, UserGuild},
        user::User,
    },
    service::{cache::CacheService, user::UserService},
};

/// Access requirement of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Caller must be a member of the guild.
    GuildMember(u64),
    /// Caller must administer the guild.
    GuildAdmin(u64),
}

impl Permission {
    fn guild_and_role(&self) -> (u64, GuildRole) {
        match *self {
            Self::GuildMember(guild_id) => (guild_id, GuildRole::Member),
            Self::GuildAdmin(guild_id) => (guild_id, GuildRole::Admin),
        }
    }
}

/// Caller that passed every stage of the guard.
#[derive(Debug, Clone)]
pub struct Authorized {
    pub user: User,
    /// Memberships as loaded for this request.
    pub memberships: Arc<Vec<UserGuild>>,
}

impl Authorized {
    pub fn membership(&self, guild_id: u64) -> Option<&UserGuild> {
        self.memberships.iter().find(|m| m.guild_id == guild_id)
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    cache: &'a CacheService,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a CacheService, session: &'a Session) -> Self {
        Self { db, cache, session }
    }

    /// Authenticates the caller and checks the requested permissions.
    ///
    /// Memberships are loaded once, cache first, and only when a permission is
    /// requested. An empty permission list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(Authorized)` - User and the memberships the checks ran against
    /// - `Err(AuthError::UserNotInSession)` - No user in session (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer stored (401)
    /// - `Err(AuthError::AccessDenied)` - Missing or insufficient guild role (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<Authorized, AppError> {
        let user_service = UserService::new(self.db, self.cache);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_service.get_user(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let memberships = if permissions.is_empty() {
            Arc::new(Vec::new())
        } else {
            user_service.get_user_guilds(user_id).await?
        };

        let authorized = Authorized { user, memberships };

        for permission in permissions {
            let (guild_id, required) = permission.guild_and_role();

            match authorized.membership(guild_id) {
                Some(membership) if membership.role.satisfies(required) => {}
                Some(membership) => {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        format!(
                            "Role {} in guild {} does not meet required role {}",
                            membership.role, guild_id, required
                        ),
                    )
                    .into());
                }
                None => {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        format!("Not a member of guild {}", guild_id),
                    )
                    .into());
                }
            }
        }

        Ok(authorized)
    }
}
