use super::*;

/// Tests toggling the scope flag on and off.
///
/// Expected: Ok(true) for each update, and reads reflect the last written value
#[tokio::test]
async fn updates_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id("123")
        .build()
        .await?;

    let repo = GuildRepository::new(db);

    assert!(repo.update_scope(123, true).await?);
    assert!(repo.find_by_guild_id(123).await?.unwrap().scope);

    assert!(repo.update_scope(123, false).await?);
    assert!(!repo.find_by_guild_id(123).await?.unwrap().scope);

    Ok(())
}

/// Tests that updating one setting leaves the others untouched.
///
/// Expected: Only remove_one_time_message changes
#[tokio::test]
async fn updates_single_column_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id("123")
        .scope(true)
        .timezone("Asia/Tokyo")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    assert!(repo.update_remove_one_time_message(123, true).await?);

    let guild = repo.find_by_guild_id(123).await?.unwrap();
    assert!(guild.remove_one_time_message);
    assert!(guild.scope);
    assert_eq!(guild.timezone, "Asia/Tokyo");

    Ok(())
}

/// Tests updating the timezone.
///
/// Expected: Ok(true) and the new timezone is stored
#[tokio::test]
async fn updates_timezone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id("123")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    assert!(repo.update_timezone(123, "America/New_York").await?);

    let guild = repo.find_by_guild_id(123).await?.unwrap();
    assert_eq!(guild.timezone, "America/New_York");

    Ok(())
}

/// Tests updating a guild that does not exist.
///
/// Expected: Ok(false) for every setting
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let repo = GuildRepository::new(db);

    assert!(!repo.update_scope(1, true).await?);
    assert!(!repo.update_remove_one_time_message(1, true).await?);
    assert!(!repo.update_timezone(1, "UTC").await?);

    Ok(())
}
