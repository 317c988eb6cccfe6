use std::collections::HashMap;

use chrono::Utc;
use futures::future::try_join_all;
use sea_orm::DatabaseConnection;

use crate::server::{
    bot::platform::DiscordPlatform,
    data::{
        guild::GuildRepository, message::MessageRepository, quota::QuotaRepository,
        webhook::WebhookRepository,
    },
    error::AppError,
    model::guild::{GuildAggregate, GuildDetail},
    util::timezone::{is_valid_timezone, month_start},
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordPlatform,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, discord: &'a dyn DiscordPlatform) -> Self {
        Self { db, discord }
    }

    /// Loads everything storage holds about a guild.
    ///
    /// Quotas are restricted to the current calendar month (UTC).
    ///
    /// # Returns
    /// - `Ok(GuildAggregate)` - Guild with messages, webhooks and quotas
    /// - `Err(AppError::NotFound)` - Guild is not stored
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_aggregate(&self, guild_id: u64) -> Result<GuildAggregate, AppError> {
        let guild = GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| not_found(guild_id))?;

        let messages = MessageRepository::new(self.db).get_by_guild(guild_id).await?;
        let webhooks = WebhookRepository::new(self.db).get_by_guild(guild_id).await?;
        let quotas = QuotaRepository::new(self.db)
            .get_since(guild_id, month_start(Utc::now()))
            .await?;

        Ok(GuildAggregate {
            guild,
            messages,
            webhooks,
            quotas,
        })
    }

    /// Builds the dashboard view of a guild.
    ///
    /// Message creators are overlaid with their live Discord profile, looked up once per
    /// distinct creator. Webhooks are limited to those both stored and still present on
    /// Discord, presented with the live data. Nothing live is written back.
    ///
    /// # Returns
    /// - `Ok(GuildDetail)` - Merged guild view
    /// - `Err(AppError::NotFound)` - Guild is not stored
    /// - `Err(AppError::DiscordErr)` - A live lookup failed
    pub async fn get_detail(&self, guild_id: u64) -> Result<GuildDetail, AppError> {
        let GuildAggregate {
            guild,
            mut messages,
            webhooks: stored_webhooks,
            quotas,
        } = self.get_aggregate(guild_id).await?;

        let mut creator_ids: Vec<u64> = messages.iter().map(|m| m.creator.discord_id).collect();
        creator_ids.sort_unstable();
        creator_ids.dedup();

        let live_users: HashMap<u64, _> = try_join_all(
            creator_ids
                .iter()
                .map(|creator_id| self.discord.get_user(*creator_id)),
        )
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

        for message in &mut messages {
            if let Some(live) = live_users.get(&message.creator.discord_id) {
                message.creator.overlay(live);
            }
        }

        let live = self.discord.get_guild(guild_id).await?;

        let webhooks = if stored_webhooks.is_empty() {
            Vec::new()
        } else {
            let stored_channels: HashMap<u64, u64> = stored_webhooks
                .into_iter()
                .map(|webhook| (webhook.webhook_id, webhook.channel_id))
                .collect();

            self.discord
                .fetch_webhooks(guild_id)
                .await?
                .into_iter()
                .filter_map(|webhook| {
                    let channel_id = *stored_channels.get(&webhook.id)?;
                    Some(webhook.into_dto(channel_id))
                })
                .collect()
        };

        Ok(GuildDetail {
            guild,
            live,
            messages,
            webhooks,
            quotas,
        })
    }

    /// Sets the scope flag of a guild.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(AppError::NotFound)` - Guild is not stored
    pub async fn set_scope(&self, guild_id: u64, scope: bool) -> Result<(), AppError> {
        let updated = GuildRepository::new(self.db)
            .update_scope(guild_id, scope)
            .await?;

        ensure_updated(updated, guild_id)
    }

    /// Sets whether one-time messages are removed after use.
    ///
    /// # Returns
    /// - `Ok(())` - Policy updated
    /// - `Err(AppError::NotFound)` - Guild is not stored
    pub async fn set_remove_one_time_message(
        &self,
        guild_id: u64,
        remove: bool,
    ) -> Result<(), AppError> {
        let updated = GuildRepository::new(self.db)
            .update_remove_one_time_message(guild_id, remove)
            .await?;

        ensure_updated(updated, guild_id)
    }

    /// Sets the timezone of a guild.
    ///
    /// # Returns
    /// - `Ok(())` - Timezone updated
    /// - `Err(AppError::BadRequest)` - Timezone is not in the allowed list, nothing written
    /// - `Err(AppError::NotFound)` - Guild is not stored
    pub async fn set_timezone(&self, guild_id: u64, timezone: &str) -> Result<(), AppError> {
        if !is_valid_timezone(timezone) {
            return Err(AppError::BadRequest(format!(
                "Unsupported timezone '{}'",
                timezone
            )));
        }

        let updated = GuildRepository::new(self.db)
            .update_timezone(guild_id, timezone)
            .await?;

        ensure_updated(updated, guild_id)
    }
}

fn not_found(guild_id: u64) -> AppError {
    AppError::NotFound(format!("Guild {} not found", guild_id))
}

fn ensure_updated(updated: bool, guild_id: u64) -> Result<(), AppError> {
    if updated {
        Ok(())
    } else {
        Err(not_found(guild_id))
    }
}

#[cfg(test)]
mod test;
