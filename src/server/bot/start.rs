use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::server::{
    bot::{handler::Handler, notifier::GuildJoinNotifier},
    config::Config,
    error::AppError,
};

/// Builds the Discord bot client without connecting it.
///
/// The client's HTTP handle is returned separately so it can back live lookups in
/// request handlers while the gateway connection runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection for the event handler
/// - `guild_join` - Notifier fired when the bot joins a guild
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Bot client and its shared HTTP client
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    guild_join: GuildJoinNotifier,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, guild_join))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway and runs until shutdown.
///
/// Call from a spawned task; this only returns when the connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
