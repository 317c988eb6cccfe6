use crate::server::{
    data::user_guild::UserGuildRepository,
    model::membership::{GuildRole, UserGuildParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user;
mod replace_for_user;

fn param(guild_id: u64, name: &str, role: GuildRole) -> UserGuildParam {
    UserGuildParam {
        guild_id,
        name: name.to_string(),
        icon: None,
        role,
    }
}
