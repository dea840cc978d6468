//! In-memory stand-ins for the store and Discord used by the command flow tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serenity::all::{ChannelId, GuildId, MessageId, UserId};

use crate::bot::error::Error;
use crate::config::Branding;
use crate::db::models::{Stats, TopTip, TopTipWindow, User};
use crate::services::cooldown::{CooldownKey, CooldownStore, MemoryCooldowns};
use crate::services::messenger::{Messenger, Reaction, TipEmbed};
use crate::services::store::TipStatsStore;
use crate::services::tipstats::{Invocation, StatsCommands};

pub const AUTHOR: u64 = 100;
pub const GUILD: u64 = 200;
pub const CHANNEL: u64 = 300;
pub const MESSAGE: u64 = 400;

pub fn guild_invocation() -> Invocation {
    Invocation {
        author_id: UserId::new(AUTHOR),
        author_name: "alice".to_string(),
        guild_id: Some(GuildId::new(GUILD)),
        channel_id: ChannelId::new(CHANNEL),
        message_id: MessageId::new(MESSAGE),
    }
}

pub fn dm_invocation() -> Invocation {
    Invocation {
        guild_id: None,
        ..guild_invocation()
    }
}

fn long_ago() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

/// Stats row whose month and day tips equal `top_tip` but fall outside any recent window
pub fn stats_row(user_id: i64, server_id: u64, total_tips: i64, total: f64, top_tip: f64) -> Stats {
    Stats {
        user_id,
        server_id: server_id as i64,
        total_tips,
        total_tipped_amount: total,
        top_tip,
        top_tip_month: top_tip,
        top_tip_month_at: long_ago(),
        top_tip_day: top_tip,
        top_tip_day_at: long_ago(),
    }
}

#[derive(Default)]
pub struct FakeStore {
    users: Mutex<HashMap<i64, User>>,
    stats: Mutex<Vec<Stats>>,
    name_updates: Mutex<Vec<String>>,
    user_lookups: AtomicUsize,
    stats_queries: AtomicUsize,
    top_tip_queries: AtomicUsize,
}

impl FakeStore {
    /// Register a user; their Discord id is `id * 100`
    pub fn add_user(&self, id: i64, name: &str) {
        self.users.lock().unwrap().insert(
            id,
            User {
                id,
                user_id: id * 100,
                name: name.to_string(),
                created_at: long_ago(),
            },
        );
    }

    pub fn add_stats(&self, stats: Stats) {
        self.stats.lock().unwrap().push(stats);
    }

    pub fn name_updates(&self) -> Vec<String> {
        self.name_updates.lock().unwrap().clone()
    }

    pub fn user_lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }

    pub fn stats_queries(&self) -> usize {
        self.stats_queries.load(Ordering::SeqCst)
    }

    pub fn top_tip_queries(&self) -> usize {
        self.top_tip_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TipStatsStore for FakeStore {
    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, Error> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.user_id == user_id.get() as i64)
            .cloned())
    }

    async fn update_user_name(&self, user: &User, name: &str) -> Result<(), Error> {
        if let Some(stored) = self.users.lock().unwrap().get_mut(&user.id) {
            stored.name = name.to_string();
        }
        self.name_updates.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn get_stats(&self, user: &User, guild_id: GuildId) -> Result<Option<Stats>, Error> {
        self.stats_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .stats
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id == user.id && s.server_id == guild_id.get() as i64)
            .cloned())
    }

    async fn top_tip(
        &self,
        guild_id: GuildId,
        window: TopTipWindow,
    ) -> Result<Option<TopTip>, Error> {
        self.top_tip_queries.fetch_add(1, Ordering::SeqCst);

        let stats = self.stats.lock().unwrap();
        let best = stats
            .iter()
            .filter(|s| s.server_id == guild_id.get() as i64)
            .filter_map(|s| window.amount_of(s).map(|amount| (s.user_id, amount)))
            .fold(None, |best: Option<(i64, f64)>, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            });

        let users = self.users.lock().unwrap();
        Ok(best.map(|(user_id, amount)| TopTip {
            amount,
            user_name: users
                .get(&user_id)
                .map(|u| u.name.clone())
                .unwrap_or_default(),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text(ChannelId, String),
    Dm(UserId, String),
    Embed(ChannelId, TipEmbed),
    Reaction(MessageId, Reaction),
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingMessenger {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// The single plain-text reply
    pub fn only_text(&self) -> String {
        let texts: Vec<String> = self
            .sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text(_, text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 1, "expected one text reply, got {:?}", texts);
        texts.into_iter().next().unwrap()
    }

    /// The single embed reply
    pub fn only_embed(&self) -> TipEmbed {
        let embeds: Vec<TipEmbed> = self
            .sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Embed(_, embed) => Some(embed),
                _ => None,
            })
            .collect();
        assert_eq!(embeds.len(), 1, "expected one embed, got {:?}", embeds);
        embeds.into_iter().next().unwrap()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), Error> {
        self.record(Sent::Text(channel_id, content.to_string()));
        Ok(())
    }

    async fn send_dm(&self, user_id: UserId, content: &str) -> Result<(), Error> {
        self.record(Sent::Dm(user_id, content.to_string()));
        Ok(())
    }

    async fn send_embed(&self, channel_id: ChannelId, embed: &TipEmbed) -> Result<(), Error> {
        self.record(Sent::Embed(channel_id, embed.clone()));
        Ok(())
    }

    async fn react(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        reaction: Reaction,
    ) -> Result<(), Error> {
        self.record(Sent::Reaction(message_id, reaction));
        Ok(())
    }
}

pub struct Fixture {
    pub store: FakeStore,
    pub cooldowns: MemoryCooldowns,
    pub messenger: RecordingMessenger,
    pub branding: Branding,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            store: FakeStore::default(),
            cooldowns: MemoryCooldowns::new(),
            messenger: RecordingMessenger::default(),
            branding: Branding::new(true, None),
        }
    }

    pub fn commands(&self) -> StatsCommands<'_> {
        StatsCommands {
            store: &self.store,
            cooldowns: &self.cooldowns,
            messenger: &self.messenger,
            branding: &self.branding,
            command_prefix: "!",
        }
    }

    pub async fn cooldowns_set_for_tipstats(&self) -> bool {
        let key = CooldownKey::TipStats {
            user_id: UserId::new(AUTHOR),
            guild_id: GuildId::new(GUILD),
        };
        self.cooldowns.exists(&key).await.unwrap()
    }
}
