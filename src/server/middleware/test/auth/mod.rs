use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    service::cache::CacheService,
};
use test_utils::{builder::TestBuilder, factory};

mod require_guild_role;
mod require_session;
