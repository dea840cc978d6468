use serenity::all::GuildId;
use tracing::debug;

use crate::bot::error::Error;
use crate::db::models::User;
use crate::services::messenger::Reaction;
use crate::services::tipstats::{Invocation, StatsCommand, StatsCommands};

/// Why an invocation was turned away before the command body ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    DirectMessage,
    NotRegistered,
}

impl RejectReason {
    /// Notice sent to the author by direct message
    pub fn notice(&self, command_prefix: &str) -> String {
        match self {
            RejectReason::DirectMessage => {
                "You can only view statistics in a server, not via DM.".to_string()
            }
            RejectReason::NotRegistered => format!(
                "You should create an account with me first, send me `{}help` to get started.",
                command_prefix
            ),
        }
    }
}

/// Result of checking an invocation before running a command
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Server the command runs in, and the registered user for `tipstats`
    Validated {
        guild_id: GuildId,
        user: Option<User>,
    },
    Rejected(RejectReason),
}

impl StatsCommands<'_> {
    /// Check that the command was sent in a server and, for `tipstats`, by a registered user.
    ///
    /// A registered user's stored name is refreshed to their current Discord name.
    pub async fn validate(
        &self,
        invocation: &Invocation,
        command: StatsCommand,
    ) -> Result<Validation, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(Validation::Rejected(RejectReason::DirectMessage));
        };

        let user = match command {
            StatsCommand::TipStats => {
                let Some(user) = self.store.get_user(invocation.author_id).await? else {
                    return Ok(Validation::Rejected(RejectReason::NotRegistered));
                };
                self.store
                    .update_user_name(&user, &invocation.author_name)
                    .await?;
                Some(User {
                    name: invocation.author_name.clone(),
                    ..user
                })
            }
            StatsCommand::TopTips => None,
        };

        Ok(Validation::Validated { guild_id, user })
    }

    /// Tell the author why their command was rejected
    pub async fn reject(&self, invocation: &Invocation, reason: &RejectReason) -> Result<(), Error> {
        debug!(
            "Rejected stats command from {}: {:?}",
            invocation.author_id, reason
        );

        self.messenger
            .send_dm(invocation.author_id, &reason.notice(self.command_prefix))
            .await?;
        self.messenger
            .react(invocation.channel_id, invocation.message_id, Reaction::Rejected)
            .await
    }
}
