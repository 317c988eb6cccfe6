use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(string(Guild::GuildId).primary_key())
                    .col(boolean(Guild::Scope).default(false))
                    .col(boolean(Guild::RemoveOneTimeMessage).default(false))
                    .col(string(Guild::Timezone).default("UTC"))
                    .col(timestamp_with_time_zone(Guild::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    GuildId,
    Scope,
    RemoveOneTimeMessage,
    Timezone,
    CreatedAt,
}
