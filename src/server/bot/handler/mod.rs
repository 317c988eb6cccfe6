use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::server::bot::notifier::GuildJoinNotifier;

pub mod guild;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub guild_join: GuildJoinNotifier,
}

impl Handler {
    pub fn new(db: DatabaseConnection, guild_join: GuildJoinNotifier) -> Self {
        Self { db, guild_join }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, &self.guild_join, guild.id.get()).await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, _ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, incomplete.id.get(), incomplete.unavailable).await;
    }
}
