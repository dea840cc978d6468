use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{CooldownBackend, Settings};
use crate::services::cooldown::{CooldownStore, MemoryCooldowns, PgCooldowns};
use crate::services::store::{PgTipStatsStore, TipStatsStore};

/// Shared data available to all commands and handlers
pub struct Data {
    pub pool: PgPool,
    pub settings: Settings,
    /// Read access to users and their aggregated tip stats
    pub store: Arc<dyn TipStatsStore>,
    /// Cooldown markers for the stats commands
    pub cooldowns: Arc<dyn CooldownStore>,
}

impl Data {
    pub fn new(pool: PgPool, settings: Settings) -> Self {
        let cooldowns: Arc<dyn CooldownStore> = match settings.cooldown_backend {
            CooldownBackend::Memory => Arc::new(MemoryCooldowns::new()),
            CooldownBackend::Postgres => Arc::new(PgCooldowns::new(pool.clone())),
        };

        Self {
            store: Arc::new(PgTipStatsStore::new(pool.clone())),
            cooldowns,
            pool,
            settings,
        }
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("command_prefix", &self.settings.command_prefix)
            .field("cooldown_backend", &self.settings.cooldown_backend)
            .finish_non_exhaustive()
    }
}

pub type Context<'a> = poise::Context<'a, Arc<Data>, crate::bot::error::Error>;
