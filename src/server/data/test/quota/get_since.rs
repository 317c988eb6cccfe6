use super::*;
use chrono::{Duration, TimeZone, Utc};

/// Tests restricting quotas to a lower date bound.
///
/// Verifies that a record dated exactly at the bound is included and older
/// records are excluded.
///
/// Expected: Ok(Vec) with the two records at or after the bound, oldest first
#[tokio::test]
async fn returns_records_since_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let guild = factory::create_guild(db).await?;
    let since = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    factory::create_quota(db, &guild.guild_id, since - Duration::seconds(1), 9).await?;
    factory::create_quota(db, &guild.guild_id, since, 1).await?;
    factory::create_quota(db, &guild.guild_id, since + Duration::days(3), 2).await?;

    let repo = QuotaRepository::new(db);
    let quotas = repo
        .get_since(guild.guild_id.parse().unwrap(), since)
        .await?;

    assert_eq!(quotas.len(), 2);
    assert_eq!(quotas[0].count, 1);
    assert_eq!(quotas[0].date, since);
    assert_eq!(quotas[1].count, 2);

    Ok(())
}
