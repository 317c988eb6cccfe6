use crate::server::data::guild::GuildRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_guild_id;
mod update;
mod upsert;
