//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a message together with its creator and guild.
///
/// This is a convenience method that creates:
/// 1. User (as message creator)
/// 2. Guild
/// 3. Message
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, guild, message))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_message_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::guild::Model,
        entity::message::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let guild = crate::factory::guild::create_guild(db).await?;
    let message =
        crate::factory::message::create_message(db, &guild.guild_id, &user.discord_id).await?;

    Ok((user, guild, message))
}
