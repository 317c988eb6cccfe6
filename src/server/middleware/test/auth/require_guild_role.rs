use super::*;

/// Tests a member accessing a member-level operation.
///
/// Expected: Ok(Authorized) carrying the membership that was checked
#[tokio::test]
async fn member_passes_member_requirement() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;
    factory::create_user_guild(db, "1", "10", "member").await?;
    AuthSession::new(session).set_user_id(1).await?;

    let authorized = AuthGuard::new(db, &cache, session)
        .require(&[Permission::GuildMember(10)])
        .await?;

    assert!(authorized.membership(10).is_some());

    Ok(())
}

/// Tests an admin accessing member and admin operations.
///
/// Expected: Ok(Authorized) for both requirements
#[tokio::test]
async fn admin_passes_member_and_admin_requirements() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;
    factory::create_user_guild(db, "1", "10", "admin").await?;
    AuthSession::new(session).set_user_id(1).await?;

    let guard = AuthGuard::new(db, &cache, session);

    assert!(guard.require(&[Permission::GuildMember(10)]).await.is_ok());
    assert!(guard.require(&[Permission::GuildAdmin(10)]).await.is_ok());

    Ok(())
}

/// Tests a member attempting an admin operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn member_fails_admin_requirement() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;
    factory::create_user_guild(db, "1", "10", "member").await?;
    AuthSession::new(session).set_user_id(1).await?;

    let result = AuthGuard::new(db, &cache, session)
        .require(&[Permission::GuildAdmin(10)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(1, _)))
    ));

    Ok(())
}

/// Tests access to a guild the user is not a member of.
///
/// Verifies that an admin role in another guild grants nothing here.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn non_member_is_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;
    factory::create_user_guild(db, "1", "20", "admin").await?;
    AuthSession::new(session).set_user_id(1).await?;

    let result = AuthGuard::new(db, &cache, session)
        .require(&[Permission::GuildMember(10)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(1, _)))
    ));

    Ok(())
}

/// Tests that every requested permission must be satisfied.
///
/// Expected: Err(AuthError::AccessDenied) when one of two guilds is missing
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .build()
        .await?;
    factory::create_user_guild(db, "1", "10", "admin").await?;
    AuthSession::new(session).set_user_id(1).await?;

    let result = AuthGuard::new(db, &cache, session)
        .require(&[Permission::GuildAdmin(10), Permission::GuildMember(20)])
        .await;

    assert!(result.is_err());

    Ok(())
}
