//! Quota factory for creating dated usage records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a quota record for a guild at the given date.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild owning the quota (must exist)
/// - `date` - Date the usage was recorded
/// - `count` - Usage counter value
pub async fn create_quota(
    db: &DatabaseConnection,
    guild_id: &str,
    date: DateTime<Utc>,
    count: i32,
) -> Result<entity::quota::Model, DbErr> {
    entity::quota::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        date: ActiveValue::Set(date),
        count: ActiveValue::Set(count),
        ..Default::default()
    }
    .insert(db)
    .await
}
