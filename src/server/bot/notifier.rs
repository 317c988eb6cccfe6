//! One-shot "guild joined" notifications keyed by guild ID.
//!
//! Install streams subscribe before the bot is invited; the bot's `guild_create`
//! handler fires every subscription waiting on that guild. A listener is removed
//! either when it fires or when its subscription is dropped, so a client that
//! disconnects early leaves nothing behind.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;
use tokio::sync::oneshot;

struct Listener {
    id: u64,
    sender: oneshot::Sender<u64>,
}

#[derive(Default)]
struct Inner {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, Vec<Listener>>>,
}

/// Registry of pending guild-join listeners, cheap to clone.
#[derive(Clone, Default)]
pub struct GuildJoinNotifier {
    inner: Arc<Inner>,
}

impl GuildJoinNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a one-shot listener for the bot joining `guild_id`.
    ///
    /// The listener is registered immediately, not when the subscription is first awaited.
    pub fn subscribe(&self, guild_id: u64) -> GuildJoinSubscription {
        let (sender, receiver) = oneshot::channel();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        self.inner
            .listeners
            .lock()
            .entry(guild_id)
            .or_default()
            .push(Listener { id, sender });

        GuildJoinSubscription {
            guild_id,
            id,
            receiver,
            notifier: self.clone(),
        }
    }

    /// Fires and removes every listener waiting on `guild_id`.
    ///
    /// # Returns
    /// Number of listeners that were still connected and received the notification.
    pub fn notify(&self, guild_id: u64) -> usize {
        let listeners = self
            .inner
            .listeners
            .lock()
            .remove(&guild_id)
            .unwrap_or_default();

        listeners
            .into_iter()
            .map(|listener| listener.sender.send(guild_id).is_ok())
            .filter(|sent| *sent)
            .count()
    }

    /// Number of listeners currently waiting on `guild_id`.
    pub fn listener_count(&self, guild_id: u64) -> usize {
        self.inner
            .listeners
            .lock()
            .get(&guild_id)
            .map_or(0, Vec::len)
    }

    fn unsubscribe(&self, guild_id: u64, id: u64) {
        let mut listeners = self.inner.listeners.lock();

        if let Some(waiting) = listeners.get_mut(&guild_id) {
            waiting.retain(|listener| listener.id != id);
            if waiting.is_empty() {
                listeners.remove(&guild_id);
            }
        }
    }
}

/// Pending notification for one guild; unsubscribes on drop.
pub struct GuildJoinSubscription {
    guild_id: u64,
    id: u64,
    receiver: oneshot::Receiver<u64>,
    notifier: GuildJoinNotifier,
}

impl GuildJoinSubscription {
    pub fn guild_id(&self) -> u64 {
        self.guild_id
    }

    /// Waits until the bot joins the guild.
    ///
    /// # Returns
    /// - `Some(guild_id)` - The bot joined the guild
    /// - `None` - The notifier was dropped before firing
    pub async fn joined(&mut self) -> Option<u64> {
        (&mut self.receiver).await.ok()
    }
}

impl Drop for GuildJoinSubscription {
    fn drop(&mut self) {
        self.notifier.unsubscribe(self.guild_id, self.id);
    }
}
