use super::*;

/// Tests listing the stored webhooks of a guild.
///
/// Expected: Ok(Vec) with the guild's webhooks only
#[tokio::test]
async fn returns_guild_webhooks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    factory::create_webhook(db, &guild.guild_id, "10").await?;
    factory::create_webhook(db, &guild.guild_id, "11").await?;
    factory::create_webhook(db, &other.guild_id, "12").await?;

    let repo = WebhookRepository::new(db);
    let mut ids: Vec<u64> = repo
        .get_by_guild(guild.guild_id.parse().unwrap())
        .await?
        .into_iter()
        .map(|webhook| webhook.webhook_id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![10, 11]);

    Ok(())
}
