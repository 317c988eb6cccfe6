use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        discord_id: 42,
        name: "Ann".to_string(),
        avatar: None,
    })
    .await?;

    let user = repo.find_by_discord_id(42).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().name, "Ann");

    Ok(())
}

/// Tests looking up a user that never logged in.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = &test.db;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(42).await?;

    assert!(user.is_none());

    Ok(())
}
