use super::*;
use sea_orm::EntityTrait;

/// Tests creating a guild the bot just joined.
///
/// Verifies that a new guild row gets the default settings.
///
/// Expected: Ok(Guild) with scope false, remove_one_time_message false and timezone UTC
#[tokio::test]
async fn creates_guild_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let repo = GuildRepository::new(db);
    let guild = repo.upsert(123456789).await?;

    assert_eq!(guild.guild_id, 123456789);
    assert!(!guild.scope);
    assert!(!guild.remove_one_time_message);
    assert_eq!(guild.timezone, "UTC");

    Ok(())
}

/// Tests upserting a guild that already exists.
///
/// Verifies that rejoining a guild keeps its configured settings instead of
/// resetting them to defaults.
///
/// Expected: Ok(Guild) with the previously stored settings
#[tokio::test]
async fn keeps_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id("555")
        .scope(true)
        .timezone("Europe/Paris")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.upsert(555).await?;

    assert!(guild.scope);
    assert_eq!(guild.timezone, "Europe/Paris");

    let count = entity::prelude::Guild::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests two join events for the same guild arriving at once.
///
/// Verifies that the second insert does not fail on the existing primary key.
///
/// Expected: Ok for both calls and a single guild row
#[tokio::test]
async fn concurrent_upserts_share_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let repo = GuildRepository::new(db);
    let (first, second) = tokio::join!(repo.upsert(777), repo.upsert(777));

    assert_eq!(first?.guild_id, 777);
    assert_eq!(second?.guild_id, 777);

    let count = entity::prelude::Guild::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

