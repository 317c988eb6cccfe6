use super::*;

/// Tests flagging memberships whose guild the bot has joined.
///
/// Expected: bot_present true only for the stored guild
#[tokio::test]
async fn flags_guilds_with_bot_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    factory::guild::GuildFactory::new(db)
        .guild_id("10")
        .build()
        .await?;
    factory::user_guild::UserGuildFactory::new(db, &user.discord_id, "10")
        .name("Alpha")
        .role("admin")
        .build()
        .await?;
    factory::user_guild::UserGuildFactory::new(db, &user.discord_id, "20")
        .name("Beta")
        .build()
        .await?;

    let repo = UserGuildRepository::new(db);
    let memberships = repo.get_by_user(user.discord_id.parse().unwrap()).await?;

    assert_eq!(memberships.len(), 2);
    assert_eq!(memberships[0].guild_id, 10);
    assert!(memberships[0].bot_present);
    assert_eq!(memberships[0].role, GuildRole::Admin);
    assert_eq!(memberships[1].guild_id, 20);
    assert!(!memberships[1].bot_present);
    assert_eq!(memberships[1].role, GuildRole::Member);

    Ok(())
}

/// Tests a stored role that is not a known role.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    factory::create_user_guild(db, &user.discord_id, "10", "owner").await?;

    let repo = UserGuildRepository::new(db);
    let result = repo.get_by_user(user.discord_id.parse().unwrap()).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
