use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok(User) with the provided name and avatar
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "Ann".to_string(),
            avatar: Some("hash".to_string()),
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "Ann");
    assert_eq!(user.avatar.as_deref(), Some("hash"));

    Ok(())
}

/// Tests refreshing an existing user on a later login.
///
/// Verifies that name and avatar are updated while the creation date is kept.
///
/// Expected: Ok(User) with new name and avatar and the original created_at
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let created = repo
        .upsert(UpsertUserParam {
            discord_id: 1,
            name: "Old".to_string(),
            avatar: Some("old".to_string()),
        })
        .await?;
    let updated = repo
        .upsert(UpsertUserParam {
            discord_id: 1,
            name: "New".to_string(),
            avatar: None,
        })
        .await?;

    assert_eq!(updated.name, "New");
    assert!(updated.avatar.is_none());
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}
