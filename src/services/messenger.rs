use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    ChannelId, Colour, CreateEmbed, CreateEmbedAuthor, CreateMessage, Http, MessageId, UserId,
};
use tracing::warn;

use crate::bot::error::Error;
use crate::constants::embeds::{COOLDOWN_EMOJI, REJECTED_EMOJI};

/// Reaction glyphs the stats commands leave on the invoking message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Rejected,
    Cooldown,
}

impl Reaction {
    pub fn emoji(&self) -> char {
        match self {
            Reaction::Rejected => REJECTED_EMOJI,
            Reaction::Cooldown => COOLDOWN_EMOJI,
        }
    }
}

/// Rich embed with an author line and a markdown description
#[derive(Debug, Clone, PartialEq)]
pub struct TipEmbed {
    pub author: String,
    pub icon_url: String,
    pub colour: Colour,
    pub description: String,
}

impl TipEmbed {
    pub fn to_create_embed(&self) -> CreateEmbed {
        CreateEmbed::new()
            .color(self.colour)
            .author(CreateEmbedAuthor::new(&self.author).icon_url(&self.icon_url))
            .description(&self.description)
    }
}

/// Outbound side effects of a command
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), Error>;

    async fn send_dm(&self, user_id: UserId, content: &str) -> Result<(), Error>;

    async fn send_embed(&self, channel_id: ChannelId, embed: &TipEmbed) -> Result<(), Error>;

    async fn react(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: Reaction,
    ) -> Result<(), Error>;
}

/// Messenger backed by the Discord HTTP API
#[derive(Clone)]
pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), Error> {
        let http: &Http = &self.http;
        channel_id.say(http, content).await?;
        Ok(())
    }

    async fn send_dm(&self, user_id: UserId, content: &str) -> Result<(), Error> {
        let http: &Http = &self.http;

        // DM failures (closed DMs, blocked bot) are logged, not propagated
        let result = async {
            let dm = user_id.create_dm_channel(http).await?;
            dm.say(http, content).await?;
            Ok::<_, serenity::Error>(())
        }
        .await;

        if let Err(e) = result {
            warn!("Could not DM user {}: {:?}", user_id, e);
        }

        Ok(())
    }

    async fn send_embed(&self, channel_id: ChannelId, embed: &TipEmbed) -> Result<(), Error> {
        let http: &Http = &self.http;
        channel_id
            .send_message(http, CreateMessage::new().embed(embed.to_create_embed()))
            .await?;
        Ok(())
    }

    async fn react(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reaction: Reaction,
    ) -> Result<(), Error> {
        let http: &Http = &self.http;
        channel_id
            .create_reaction(http, message_id, reaction.emoji())
            .await?;
        Ok(())
    }
}
