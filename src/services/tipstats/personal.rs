use tracing::debug;

use crate::bot::error::Error;
use crate::constants::cooldowns::stats_cooldown;
use crate::services::cooldown::CooldownKey;
use crate::services::messenger::Reaction;
use crate::services::tipstats::formatter::{personal_stats_message, COOLDOWN_NOTICE};
use crate::services::tipstats::guard::Validation;
use crate::services::tipstats::{Invocation, StatsCommand, StatsCommands};

impl StatsCommands<'_> {
    /// Reply with the author's tipping totals in this server
    pub async fn tipstats(&self, invocation: &Invocation) -> Result<(), Error> {
        let (guild_id, user) = match self.validate(invocation, StatsCommand::TipStats).await? {
            Validation::Validated {
                guild_id,
                user: Some(user),
            } => (guild_id, user),
            Validation::Validated { user: None, .. } => {
                return Err(Error::custom("tipstats validated without a user"));
            }
            Validation::Rejected(reason) => return self.reject(invocation, &reason).await,
        };

        let key = CooldownKey::TipStats {
            user_id: invocation.author_id,
            guild_id,
        };

        if self.cooldowns.exists(&key).await? {
            debug!("tipstats on cooldown for {}", key);
            self.messenger
                .react(invocation.channel_id, invocation.message_id, Reaction::Cooldown)
                .await?;
            self.messenger
                .send_dm(invocation.author_id, COOLDOWN_NOTICE)
                .await?;
            return Ok(());
        }

        let stats = self.store.get_stats(&user, guild_id).await?;
        let response = personal_stats_message(invocation.author_id, stats.as_ref(), self.branding);

        self.messenger
            .send_text(invocation.channel_id, &response)
            .await?;
        self.cooldowns.set(&key, stats_cooldown()).await
    }
}
