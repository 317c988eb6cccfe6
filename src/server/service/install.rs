//! Install-completion stream.
//!
//! After a dashboard user invites the bot, the frontend waits on this stream until the
//! bot's `guild_create` event for that guild arrives.

use futures::{future, stream, Stream, StreamExt};

use crate::server::{bot::notifier::GuildJoinNotifier, service::cache::CacheService};

/// Event emitted once the bot has joined the awaited guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallEvent {
    /// Event ID, the guild ID.
    pub id: String,
    /// Event payload, the guild ID.
    pub data: String,
}

impl InstallEvent {
    pub fn new(guild_id: u64) -> Self {
        Self {
            id: guild_id.to_string(),
            data: guild_id.to_string(),
        }
    }
}

pub struct InstallService<'a> {
    guild_join: &'a GuildJoinNotifier,
    cache: &'a CacheService,
}

impl<'a> InstallService<'a> {
    pub fn new(guild_join: &'a GuildJoinNotifier, cache: &'a CacheService) -> Self {
        Self { guild_join, cache }
    }

    /// Streams a single event when the bot joins `guild_id`, then ends.
    ///
    /// The listener is registered before this returns. When the event fires, the cached
    /// guild list of `user_id` is dropped since it now lacks the new guild. Dropping the
    /// stream before then removes the listener.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the user is adding the bot to
    /// - `user_id` - User waiting on the install
    pub fn watch(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> impl Stream<Item = InstallEvent> + Send + 'static {
        let mut subscription = self.guild_join.subscribe(guild_id);
        let cache = self.cache.clone();

        tracing::debug!(
            "User {} waiting on install of guild {} ({} listeners)",
            user_id,
            subscription.guild_id(),
            self.guild_join.listener_count(guild_id)
        );

        stream::once(async move {
            let guild_id = subscription.joined().await?;
            cache.invalidate_user(user_id).await;

            Some(InstallEvent::new(guild_id))
        })
        .filter_map(future::ready)
    }
}
