use async_trait::async_trait;
use serenity::all::{GuildId, UserId};
use sqlx::PgPool;

use crate::bot::error::Error;
use crate::db::models::{Stats, TopTip, TopTipWindow, User};
use crate::db::queries::{stats, user};

/// Read access to registered users and their tip aggregates
#[async_trait]
pub trait TipStatsStore: Send + Sync {
    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, Error>;

    async fn update_user_name(&self, user: &User, name: &str) -> Result<(), Error>;

    async fn get_stats(&self, user: &User, guild_id: GuildId) -> Result<Option<Stats>, Error>;

    /// Biggest tip in a server within `window`, with the tipper's name
    async fn top_tip(
        &self,
        guild_id: GuildId,
        window: TopTipWindow,
    ) -> Result<Option<TopTip>, Error>;
}

#[derive(Debug, Clone)]
pub struct PgTipStatsStore {
    pool: PgPool,
}

impl PgTipStatsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TipStatsStore for PgTipStatsStore {
    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, Error> {
        Ok(user::get_by_discord_id(&self.pool, user_id.get() as i64).await?)
    }

    async fn update_user_name(&self, user: &User, name: &str) -> Result<(), Error> {
        user::update_name(&self.pool, user.id, name).await?;
        Ok(())
    }

    async fn get_stats(&self, user: &User, guild_id: GuildId) -> Result<Option<Stats>, Error> {
        Ok(stats::get_for_user(&self.pool, user.id, guild_id.get() as i64).await?)
    }

    async fn top_tip(
        &self,
        guild_id: GuildId,
        window: TopTipWindow,
    ) -> Result<Option<TopTip>, Error> {
        Ok(stats::top_tip(&self.pool, guild_id.get() as i64, window).await?)
    }
}
