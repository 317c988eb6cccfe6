//! Webhook factory for creating stored webhook records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a stored webhook for a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild owning the webhook (must exist)
/// - `webhook_id` - Discord webhook ID
pub async fn create_webhook(
    db: &DatabaseConnection,
    guild_id: &str,
    webhook_id: &str,
) -> Result<entity::webhook::Model, DbErr> {
    entity::webhook::ActiveModel {
        webhook_id: ActiveValue::Set(webhook_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_id().to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
