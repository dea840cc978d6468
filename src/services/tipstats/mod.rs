//! The `tipstats` and `toptips` command flows.
//!
//! Each flow runs validation, the cooldown check, the stats reads and the reply in
//! program order. Dependencies are passed in through [`StatsCommands`] so the flows
//! can run against Discord and Postgres or against in-memory fakes.

pub mod formatter;
pub mod guard;
mod personal;
mod top;

#[cfg(test)]
mod fakes;

use serenity::all::{ChannelId, GuildId, Message, MessageId, UserId};

use crate::config::Branding;
use crate::services::cooldown::CooldownStore;
use crate::services::messenger::Messenger;
use crate::services::store::TipStatsStore;

/// Which stats command is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsCommand {
    TipStats,
    TopTips,
}

/// The parts of an incoming command message the flows need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub author_id: UserId,
    pub author_name: String,
    /// `None` when sent in a direct message
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

impl Invocation {
    pub fn from_message(msg: &Message) -> Self {
        Self {
            author_id: msg.author.id,
            author_name: msg.author.name.clone(),
            guild_id: msg.guild_id,
            channel_id: msg.channel_id,
            message_id: msg.id,
        }
    }
}

/// Everything the stats flows talk to
pub struct StatsCommands<'a> {
    pub store: &'a dyn TipStatsStore,
    pub cooldowns: &'a dyn CooldownStore,
    pub messenger: &'a dyn Messenger,
    pub branding: &'a Branding,
    pub command_prefix: &'a str,
}
