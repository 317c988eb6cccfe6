use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGuild::Table)
                    .if_not_exists()
                    .col(pk_auto(UserGuild::Id))
                    .col(string(UserGuild::UserId))
                    .col(string(UserGuild::GuildId))
                    .col(string(UserGuild::Name))
                    .col(string_null(UserGuild::Icon))
                    .col(string(UserGuild::Role))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_guild_user_id")
                            .from(UserGuild::Table, UserGuild::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_guild_unique")
                            .col(UserGuild::UserId)
                            .col(UserGuild::GuildId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGuild {
    Table,
    Id,
    UserId,
    GuildId,
    Name,
    Icon,
    Role,
}
