use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quota::Table)
                    .if_not_exists()
                    .col(pk_auto(Quota::Id))
                    .col(string(Quota::GuildId))
                    .col(timestamp_with_time_zone(Quota::Date))
                    .col(integer(Quota::Count))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quota_guild_id")
                            .from(Quota::Table, Quota::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_quota_guild_date")
                            .col(Quota::GuildId)
                            .col(Quota::Date),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quota::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quota {
    Table,
    Id,
    GuildId,
    Date,
    Count,
}
