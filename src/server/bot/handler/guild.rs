//! Guild lifecycle handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in, when the bot joins
//! a new guild, and when a guild becomes available again after an outage. The guild
//! row is created with default settings the first time and left alone afterwards.
//!
//! `guild_delete` fires when the bot is removed from a guild or when the guild goes
//! unavailable. Only a removal deletes the stored guild.

use sea_orm::DatabaseConnection;

use crate::server::{bot::notifier::GuildJoinNotifier, data::guild::GuildRepository};

/// Handles the guild_create event.
///
/// Ensures the guild is stored, then wakes any install stream waiting on it. Listeners
/// are only notified once the row exists, so a client reacting to the event can load
/// the guild right away.
///
/// # Arguments
/// - `db` - Database connection for storing the guild
/// - `guild_join` - Notifier for pending install streams
/// - `guild_id` - ID of the guild that became available
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    guild_join: &GuildJoinNotifier,
    guild_id: u64,
) {
    tracing::debug!("Guild create event for guild {}", guild_id);

    if let Err(e) = GuildRepository::new(db).upsert(guild_id).await {
        tracing::error!("Failed to upsert guild {}: {:?}", guild_id, e);
        return;
    }

    let notified = guild_join.notify(guild_id);
    if notified > 0 {
        tracing::info!(
            "Bot added to guild {}, notified {} install stream(s)",
            guild_id,
            notified
        );
    }
}

/// Handles the guild_delete event.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - ID of the guild the bot lost access to
/// - `unavailable` - `true` for an outage, `false` when the bot was removed
pub async fn handle_guild_delete(db: &DatabaseConnection, guild_id: u64, unavailable: bool) {
    if unavailable {
        tracing::debug!("Guild {} became unavailable", guild_id);
        return;
    }

    match GuildRepository::new(db).delete(guild_id).await {
        Ok(()) => tracing::info!("Bot removed from guild {}, guild deleted", guild_id),
        Err(e) => tracing::error!("Failed to delete guild {}: {:?}", guild_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that joining a guild stores it and wakes waiting install streams.
    ///
    /// Expected: Guild stored with defaults and the subscription resolves
    #[tokio::test]
    async fn stores_guild_and_notifies_listeners() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = &test.db;
        let notifier = GuildJoinNotifier::new();
        let mut subscription = notifier.subscribe(321);

        handle_guild_create(db, &notifier, 321).await;

        let guild = GuildRepository::new(db).find_by_guild_id(321).await?;
        assert!(guild.is_some());
        assert_eq!(subscription.joined().await, Some(321));
        assert_eq!(notifier.listener_count(321), 0);

        Ok(())
    }

    /// Tests that an outage does not delete the stored guild.
    ///
    /// Expected: Guild still stored after an unavailable event, removed after a removal
    #[tokio::test]
    async fn deletes_guild_only_on_removal() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
        let db = &test.db;
        factory::guild::GuildFactory::new(db)
            .guild_id("55")
            .build()
            .await?;
        let repo = GuildRepository::new(db);

        handle_guild_delete(db, 55, true).await;
        assert!(repo.find_by_guild_id(55).await?.is_some());

        handle_guild_delete(db, 55, false).await;
        assert!(repo.find_by_guild_id(55).await?.is_none());

        Ok(())
    }
}
