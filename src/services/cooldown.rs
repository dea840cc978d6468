use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use serenity::all::{ChannelId, GuildId, UserId};
use sqlx::PgPool;
use tokio::time::interval;
use tracing::{debug, error};

use crate::bot::error::Error;
use crate::constants::cooldowns::COOLDOWN_PURGE_INTERVAL_SECONDS;
use crate::db::queries::cooldown;

/// Scope a cooldown marker applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownKey {
    /// One user's `tipstats` in one server
    TipStats { user_id: UserId, guild_id: GuildId },
    /// `toptips` in one channel
    TopTips { channel_id: ChannelId },
}

impl fmt::Display for CooldownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CooldownKey::TipStats { user_id, guild_id } => {
                write!(f, "tipstats:{}:{}", user_id, guild_id)
            }
            CooldownKey::TopTips { channel_id } => write!(f, "toptips:{}", channel_id),
        }
    }
}

/// Short-lived markers whose presence suppresses a repeated command.
///
/// `exists` followed by `set` is not atomic; two invocations racing each other
/// can both get through.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    async fn exists(&self, key: &CooldownKey) -> Result<bool, Error>;

    async fn set(&self, key: &CooldownKey, ttl: Duration) -> Result<(), Error>;

    /// Drop markers that have expired, returning how many were removed
    async fn purge_expired(&self) -> Result<u64, Error>;
}

/// Cooldowns kept in process memory
#[derive(Debug, Default)]
pub struct MemoryCooldowns {
    /// key -> instant the marker expires
    markers: DashMap<String, Instant>,
}

impl MemoryCooldowns {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CooldownStore for MemoryCooldowns {
    async fn exists(&self, key: &CooldownKey) -> Result<bool, Error> {
        Ok(self
            .markers
            .get(&key.to_string())
            .map(|expires_at| *expires_at > Instant::now())
            .unwrap_or(false))
    }

    async fn set(&self, key: &CooldownKey, ttl: Duration) -> Result<(), Error> {
        self.markers.insert(key.to_string(), Instant::now() + ttl);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, Error> {
        let now = Instant::now();
        let before = self.markers.len();
        self.markers.retain(|_, expires_at| *expires_at > now);
        Ok(before.saturating_sub(self.markers.len()) as u64)
    }
}

/// Cooldowns kept in the `command_cooldowns` table, shared across bot instances
#[derive(Debug, Clone)]
pub struct PgCooldowns {
    pool: PgPool,
}

impl PgCooldowns {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CooldownStore for PgCooldowns {
    async fn exists(&self, key: &CooldownKey) -> Result<bool, Error> {
        Ok(cooldown::exists(&self.pool, &key.to_string()).await?)
    }

    async fn set(&self, key: &CooldownKey, ttl: Duration) -> Result<(), Error> {
        cooldown::set(&self.pool, &key.to_string(), ttl.as_secs_f64()).await?;
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, Error> {
        Ok(cooldown::purge_expired(&self.pool).await?)
    }
}

/// Start the background task that sweeps expired cooldown markers
pub fn spawn_cooldown_purger(cooldowns: Arc<dyn CooldownStore>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(COOLDOWN_PURGE_INTERVAL_SECONDS));

        loop {
            ticker.tick().await;

            match cooldowns.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => debug!("Purged {} expired cooldown markers", removed),
                Err(e) => error!("Error purging cooldown markers: {:?}", e),
            }
        }
    });
}
