//! Process-wide short-TTL caches.

use std::{sync::Arc, time::Duration};

use moka::future::Cache;

use crate::server::model::{discord::LiveMember, membership::UserGuild};

/// Time to live of every cached entry.
pub const CACHE_TTL: Duration = Duration::from_secs(300);

const MAX_CAPACITY: u64 = 10_000;

/// Cache key of a member search: (guild ID, raw query).
pub type MemberSearchKey = (u64, String);

/// Caches shared by all requests, cheap to clone.
#[derive(Clone)]
pub struct CacheService {
    /// Guild memberships per user ID.
    pub user_guilds: Cache<u64, Arc<Vec<UserGuild>>>,
    pub member_search: Cache<MemberSearchKey, Vec<LiveMember>>,
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheService {
    pub fn new() -> Self {
        Self {
            user_guilds: Cache::builder()
                .max_capacity(MAX_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
            member_search: Cache::builder()
                .max_capacity(MAX_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    /// Drops the cached guild list of a user so the next read hits the database.
    pub async fn invalidate_user(&self, user_id: u64) {
        self.user_guilds.invalidate(&user_id).await;
    }
}
