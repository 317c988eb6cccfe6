use super::*;

/// Tests finding an existing guild.
///
/// Expected: Ok(Some(Guild)) with the stored settings
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id("42")
        .remove_one_time_message(true)
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(42).await?;

    assert!(guild.is_some());
    let guild = guild.unwrap();
    assert_eq!(guild.guild_id, 42);
    assert!(guild.remove_one_time_message);

    Ok(())
}

/// Tests looking up a guild the bot never joined.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(999).await?;

    assert!(guild.is_none());

    Ok(())
}

/// Tests filtering a list of guild IDs down to stored guilds.
///
/// Expected: Ok(Vec) containing only the stored guild
#[tokio::test]
async fn finds_existing_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    factory::guild::GuildFactory::new(db)
        .guild_id("100")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let ids = repo.find_existing_ids(&[100, 200]).await?;

    assert_eq!(ids, vec![100]);
    assert!(repo.find_existing_ids(&[]).await?.is_empty());

    Ok(())
}
