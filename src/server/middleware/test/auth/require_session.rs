use super::*;

/// Tests a request without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    let result = AuthGuard::new(db, &cache, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session referencing a user that is not stored.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, &cache, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests a logged-in user with no permission requirements.
///
/// Expected: Ok(Authorized) with the stored user
#[tokio::test]
async fn accepts_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = CacheService::new();

    let user = factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(123456789).await?;

    let authorized = AuthGuard::new(db, &cache, session).require(&[]).await?;

    assert_eq!(authorized.user.discord_id, 123456789);
    assert_eq!(authorized.user.name, user.name);

    Ok(())
}
