use super::*;

/// Tests syncing memberships at login.
///
/// Verifies that previous memberships are replaced by the new listing.
///
/// Expected: Ok(()) and only the new memberships remain
#[tokio::test]
async fn replaces_previous_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    factory::create_user_guild(db, &user.discord_id, "1", "admin").await?;
    let user_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(
        user_id,
        vec![
            param(2, "Beta", GuildRole::Member),
            param(3, "Gamma", GuildRole::Admin),
        ],
    )
    .await?;

    let memberships = repo.get_by_user(user_id).await?;
    let ids: Vec<u64> = memberships.iter().map(|m| m.guild_id).collect();

    assert_eq!(ids, vec![2, 3]);
    assert_eq!(memberships[1].role, GuildRole::Admin);

    Ok(())
}

/// Tests syncing an empty guild listing.
///
/// Expected: Ok(()) and no memberships left
#[tokio::test]
async fn clears_memberships_for_empty_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    factory::create_user_guild(db, &user.discord_id, "1", "member").await?;
    let user_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(user_id, Vec::new()).await?;

    assert!(repo.get_by_user(user_id).await?.is_empty());

    Ok(())
}

/// Tests that syncing one user leaves other users untouched.
///
/// Expected: The other user's membership is kept
#[tokio::test]
async fn keeps_other_users_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_user_guild(db, &other.discord_id, "1", "member").await?;

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(user.discord_id.parse().unwrap(), Vec::new())
        .await?;

    let kept = repo.get_by_user(other.discord_id.parse().unwrap()).await?;
    assert_eq!(kept.len(), 1);

    Ok(())
}
