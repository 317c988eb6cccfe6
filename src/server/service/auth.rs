//! Discord OAuth2 login.
//!
//! The callback refreshes the stored user and replaces their guild memberships from
//! the Discord guild listing, which is what the role guard checks against.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::{GuildInfo, User as DiscordUser};
use url::Url;

use crate::server::{
    data::{user::UserRepository, user_guild::UserGuildRepository},
    error::{auth::AuthError, AppError},
    model::{
        membership::{GuildRole, UserGuildParam},
        user::{UpsertUserParam, User},
    },
    service::cache::CacheService,
    state::OAuth2Client,
};

const DISCORD_API_URL: &str = "https://discord.com/api";

type DiscordToken = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

/// Service for the Discord OAuth2 login flow.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    cache: &'a CacheService,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        cache: &'a CacheService,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            cache,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to keep in session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Completes a login from the OAuth2 callback.
    ///
    /// Exchanges the code, upserts the user from their Discord profile and replaces
    /// their guild memberships. The user's cached guild list is invalidated so the
    /// new memberships apply to the very next request.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the callback query
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Fetching the profile or guilds failed
    /// - `Err(AppError::DbErr)` - Database error while storing
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;
        let guilds = self.fetch_user_guilds(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get(),
                name: discord_user.global_name.unwrap_or(discord_user.name),
                avatar: discord_user.avatar.map(|hash| hash.to_string()),
            })
            .await?;

        let memberships = guilds
            .into_iter()
            .map(|guild| UserGuildParam {
                guild_id: guild.id.get(),
                role: GuildRole::from_permissions(guild.owner, guild.permissions),
                icon: guild.icon.map(|hash| hash.to_string()),
                name: guild.name,
            })
            .collect();

        UserGuildRepository::new(self.db)
            .replace_for_user(user.discord_id, memberships)
            .await?;
        self.cache.invalidate_user(user.discord_id).await;

        tracing::debug!("User {} logged in", user.discord_id);

        Ok(user)
    }

    /// Retrieves the Discord profile of the token owner.
    async fn fetch_discord_user(&self, token: &DiscordToken) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }

    /// Retrieves the guilds of the token owner with their permissions.
    async fn fetch_user_guilds(&self, token: &DiscordToken) -> Result<Vec<GuildInfo>, AppError> {
        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", DISCORD_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GuildInfo>>()
            .await?;

        Ok(guilds)
    }
}
