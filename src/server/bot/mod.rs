//! Discord bot integration.
//!
//! The bot keeps the guild table in step with the guilds it is a member of and
//! signals when it joins a guild, which completes the install flow of the dashboard.
//! Its HTTP client backs the `DiscordPlatform` used by request handlers for live
//! lookups of users, guilds, webhooks and members.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required: guild create and delete events drive everything the
//! bot stores. Member search is a plain HTTP call to the guild member search
//! endpoint and does not depend on gateway intents, so no privileged intent is
//! requested.

pub mod handler;
pub mod notifier;
pub mod platform;
pub mod start;

#[cfg(test)]
pub mod mock;
