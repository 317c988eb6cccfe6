use crate::server::{
    bot::platform::DiscordPlatform, error::AppError, model::discord::LiveMember,
    service::cache::CacheService,
};

/// Prefix marking a query as a member lookup.
pub const MEMBER_MARKER: char = '@';
/// Maximum number of members returned by one search.
pub const MEMBER_SEARCH_LIMIT: u64 = 20;

pub struct MemberService<'a> {
    discord: &'a dyn DiscordPlatform,
    cache: &'a CacheService,
}

impl<'a> MemberService<'a> {
    pub fn new(discord: &'a dyn DiscordPlatform, cache: &'a CacheService) -> Self {
        Self { discord, cache }
    }

    /// Suggests guild members for a mention being typed.
    ///
    /// Only queries starting with `@` are looked up, with the marker stripped; any
    /// other query yields no suggestions. Results are cached per guild and raw query.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to search in
    /// - `query` - Raw query as typed, including the marker
    ///
    /// # Returns
    /// - `Ok(Vec<LiveMember>)` - Up to 20 matching members
    /// - `Err(AppError::DiscordErr)` - Discord lookup failed
    pub async fn search(&self, guild_id: u64, query: &str) -> Result<Vec<LiveMember>, AppError> {
        let key = (guild_id, query.to_string());
        if let Some(members) = self.cache.member_search.get(&key).await {
            return Ok(members);
        }

        let members = match query.strip_prefix(MEMBER_MARKER) {
            Some(name) if !name.is_empty() => {
                self.discord
                    .search_members(guild_id, name, MEMBER_SEARCH_LIMIT)
                    .await?
            }
            _ => Vec::new(),
        };

        self.cache.member_search.insert(key, members.clone()).await;

        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::bot::mock::MockDiscord;

    fn discord_with_members(count: u64) -> MockDiscord {
        let mut discord = MockDiscord::new().with_member(1, 999, "bob", None);
        for id in 0..count {
            discord = discord.with_member(1, id, &format!("ann{}", id), Some("Annie"));
        }
        discord
    }

    #[tokio::test]
    async fn strips_marker_and_bounds_results() -> Result<(), AppError> {
        let discord = discord_with_members(30);
        let cache = CacheService::new();

        let members = MemberService::new(&discord, &cache).search(1, "@ann").await?;

        assert_eq!(members.len(), 20);
        assert!(members.iter().all(|m| m.nickname.as_deref() == Some("Annie")));
        assert_eq!(
            *discord.last_search.lock(),
            Some(("ann".to_string(), MEMBER_SEARCH_LIMIT))
        );

        Ok(())
    }

    #[tokio::test]
    async fn query_without_marker_is_empty() -> Result<(), AppError> {
        let discord = discord_with_members(3);
        let cache = CacheService::new();
        let service = MemberService::new(&discord, &cache);

        assert!(service.search(1, "ann").await?.is_empty());
        assert!(service.search(1, "@").await?.is_empty());
        assert_eq!(discord.member_searches(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn memoizes_per_guild_and_query() -> Result<(), AppError> {
        let discord = discord_with_members(3);
        let cache = CacheService::new();
        let service = MemberService::new(&discord, &cache);

        let first = service.search(1, "@ann").await?;
        let second = service.search(1, "@ann").await?;
        service.search(1, "@bob").await?;

        assert_eq!(first, second);
        assert_eq!(discord.member_searches(), 2);

        Ok(())
    }
}
