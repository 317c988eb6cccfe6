use super::*;

/// Tests loading messages with their creator and files.
///
/// Verifies that each message carries its stored creator and only its own
/// attachments.
///
/// Expected: Ok(Vec) with two messages, files grouped per message
#[tokio::test]
async fn loads_messages_with_creator_and_files() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::user::UserFactory::new(db)
        .discord_id("1001")
        .name("Stored Name")
        .avatar(Some("abc".to_string()))
        .build()
        .await?;
    let guild = factory::create_guild(db).await?;
    let first = factory::message::MessageFactory::new(db, &guild.guild_id, &user.discord_id)
        .content("first")
        .build()
        .await?;
    let second = factory::message::MessageFactory::new(db, &guild.guild_id, &user.discord_id)
        .content("second")
        .one_time(true)
        .build()
        .await?;
    factory::create_file(db, first.id, "a.png").await?;
    factory::create_file(db, first.id, "b.png").await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_guild(guild.guild_id.parse().unwrap()).await?;

    assert_eq!(messages.len(), 2);

    let loaded_first = messages.iter().find(|m| m.id == first.id).unwrap();
    assert_eq!(loaded_first.content, "first");
    assert_eq!(loaded_first.files.len(), 2);
    assert_eq!(loaded_first.creator.discord_id, 1001);
    assert_eq!(loaded_first.creator.name, "Stored Name");
    assert_eq!(
        loaded_first.creator.avatar_url.as_deref(),
        Some("https://cdn.discordapp.com/avatars/1001/abc.png")
    );

    let loaded_second = messages.iter().find(|m| m.id == second.id).unwrap();
    assert!(loaded_second.one_time);
    assert!(loaded_second.files.is_empty());

    Ok(())
}

/// Tests that messages of other guilds are excluded.
///
/// Expected: Ok(Vec) containing only the requested guild's message
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let message = factory::create_message(db, &guild.guild_id, &user.discord_id).await?;
    factory::create_message(db, &other.guild_id, &user.discord_id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_guild(guild.guild_id.parse().unwrap()).await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, message.id);

    Ok(())
}

/// Tests a guild without messages.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_guild_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let guild = factory::create_guild(db).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_guild(guild.guild_id.parse().unwrap()).await?;

    assert!(messages.is_empty());

    Ok(())
}
