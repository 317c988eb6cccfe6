//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database handle and HTTP clients
//! share their pools, and the remaining services are reference counted.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    bot::{notifier::GuildJoinNotifier, platform::DiscordPlatform},
    service::cache::CacheService,
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for Discord OAuth and user API requests, with redirects disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Live Discord lookups through the bot.
    pub discord: Arc<dyn DiscordPlatform>,

    pub cache: CacheService,

    /// Fired by the bot when it joins a guild; awaited by install streams.
    pub guild_join: GuildJoinNotifier,

    /// Frontend URL users are sent back to after login.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord: Arc<dyn DiscordPlatform>,
        guild_join: GuildJoinNotifier,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord,
            cache: CacheService::new(),
            guild_join,
            app_url,
        }
    }
}
