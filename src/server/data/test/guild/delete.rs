use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a guild after the bot was removed.
///
/// Verifies that messages, files, webhooks and quotas are removed along with it.
///
/// Expected: Ok(()) and no rows left for the guild
#[tokio::test]
async fn deletes_guild_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let (_user, guild, message) = factory::helpers::create_message_with_dependencies(db).await?;
    factory::create_file(db, message.id, "banner.png").await?;
    factory::create_webhook(db, &guild.guild_id, "777").await?;
    factory::create_quota(db, &guild.guild_id, chrono::Utc::now(), 3).await?;

    let guild_id: u64 = guild.guild_id.parse().unwrap();
    let repo = GuildRepository::new(db);
    repo.delete(guild_id).await?;

    assert!(repo.find_by_guild_id(guild_id).await?.is_none());
    assert!(entity::prelude::Message::find().all(db).await?.is_empty());
    assert!(entity::prelude::File::find().all(db).await?.is_empty());
    assert!(entity::prelude::Webhook::find().all(db).await?.is_empty());
    assert!(entity::prelude::Quota::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a guild that is not stored.
///
/// Expected: Ok(())
#[tokio::test]
async fn ignores_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = &test.db;

    let repo = GuildRepository::new(db);
    let result = repo.delete(404).await;

    assert!(result.is_ok());

    Ok(())
}
