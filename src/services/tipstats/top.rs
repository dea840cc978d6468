use chrono::{DateTime, Utc};
use tracing::debug;

use crate::bot::error::Error;
use crate::constants::cooldowns::stats_cooldown;
use crate::db::models::TopTipWindow;
use crate::services::cooldown::CooldownKey;
use crate::services::messenger::Reaction;
use crate::services::tipstats::formatter::{
    biggest_tips_embed, day_ago, start_of_month, NO_SERVER_STATS,
};
use crate::services::tipstats::guard::Validation;
use crate::services::tipstats::{Invocation, StatsCommand, StatsCommands};

impl StatsCommands<'_> {
    /// Reply with the biggest tips in this server over the last day, this month and all time.
    ///
    /// The channel cooldown is only set when the server has no stats at all.
    pub async fn toptips(&self, invocation: &Invocation, now: DateTime<Utc>) -> Result<(), Error> {
        let guild_id = match self.validate(invocation, StatsCommand::TopTips).await? {
            Validation::Validated { guild_id, .. } => guild_id,
            Validation::Rejected(reason) => return self.reject(invocation, &reason).await,
        };

        let key = CooldownKey::TopTips {
            channel_id: invocation.channel_id,
        };

        if self.cooldowns.exists(&key).await? {
            debug!("toptips on cooldown for {}", key);
            return self
                .messenger
                .react(invocation.channel_id, invocation.message_id, Reaction::Cooldown)
                .await;
        }

        let Some(all_time) = self.store.top_tip(guild_id, TopTipWindow::AllTime).await? else {
            self.cooldowns.set(&key, stats_cooldown()).await?;
            return self
                .messenger
                .send_text(invocation.channel_id, NO_SERVER_STATS)
                .await;
        };

        let month = self
            .store
            .top_tip(
                guild_id,
                TopTipWindow::Month {
                    since: start_of_month(now),
                },
            )
            .await?;

        let day = self
            .store
            .top_tip(guild_id, TopTipWindow::Day { since: day_ago(now) })
            .await?;

        let embed = biggest_tips_embed(day.as_ref(), month.as_ref(), &all_time, now, self.branding);
        self.messenger.send_embed(invocation.channel_id, &embed).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::services::messenger::Reaction;
    use crate::services::tipstats::fakes::{
        dm_invocation, guild_invocation, stats_row, Fixture, Sent, GUILD,
    };
    use crate::services::tipstats::formatter::NO_SERVER_STATS;

    #[tokio::test]
    async fn test_direct_message_sends_one_notice() {
        let fixture = Fixture::new();
        fixture
            .commands()
            .toptips(&dm_invocation(), Utc::now())
            .await
            .unwrap();

        let sent = fixture.messenger.sent();
        assert_eq!(sent.iter().filter(|s| matches!(s, Sent::Dm(..))).count(), 1);
        assert!(!sent.iter().any(|s| matches!(s, Sent::Text(..) | Sent::Embed(..))));
        assert_eq!(fixture.store.top_tip_queries(), 0);
    }

    #[tokio::test]
    async fn test_all_three_sections() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap();
        let fixture = Fixture::new();
        fixture.store.add_user(1, "alice");
        let mut row = stats_row(1, GUILD, 1, 10.0, 10.0);
        row.top_tip_month = 10.0;
        row.top_tip_month_at = now - Duration::hours(1);
        row.top_tip_day = 10.0;
        row.top_tip_day_at = now - Duration::hours(1);
        fixture.store.add_stats(row);

        fixture
            .commands()
            .toptips(&guild_invocation(), now)
            .await
            .unwrap();

        let embed = fixture.messenger.only_embed();
        assert_eq!(
            embed.description,
            "**Last 24 Hours**\n```10.0 BAN - by alice```\n\
             **In May**\n```10.0 BAN - by alice```\n\
             **All Time**\n```10.0 BAN - by alice```"
        );
        assert_eq!(fixture.store.top_tip_queries(), 3);
    }

    #[tokio::test]
    async fn test_only_all_time_section() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap();
        let fixture = Fixture::new();
        fixture.store.add_user(1, "alice");
        let mut row = stats_row(1, GUILD, 3, 30.0, 25.0);
        row.top_tip_month = 25.0;
        row.top_tip_month_at = Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap();
        row.top_tip_day = 25.0;
        row.top_tip_day_at = Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap();
        fixture.store.add_stats(row);

        fixture
            .commands()
            .toptips(&guild_invocation(), now)
            .await
            .unwrap();

        assert_eq!(
            fixture.messenger.only_embed().description,
            "**All Time**\n```25.0 BAN - by alice```"
        );
    }

    #[tokio::test]
    async fn test_windows_pick_different_tippers() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 15, 0, 0).unwrap();
        let fixture = Fixture::new();
        fixture.store.add_user(1, "alice");
        fixture.store.add_user(2, "bob");

        // alice: huge tip last month, small one this month
        let mut alice = stats_row(1, GUILD, 2, 101.0, 100.0);
        alice.top_tip_month = 1.0;
        alice.top_tip_month_at = now - Duration::days(3);
        alice.top_tip_day_at = now - Duration::days(3);
        fixture.store.add_stats(alice);

        // bob: moderate tip today
        let mut bob = stats_row(2, GUILD, 1, 5.0, 5.0);
        bob.top_tip_month = 5.0;
        bob.top_tip_month_at = now - Duration::hours(2);
        bob.top_tip_day = 5.0;
        bob.top_tip_day_at = now - Duration::hours(2);
        fixture.store.add_stats(bob);

        fixture
            .commands()
            .toptips(&guild_invocation(), now)
            .await
            .unwrap();

        assert_eq!(
            fixture.messenger.only_embed().description,
            "**Last 24 Hours**\n```5.0 BAN - by bob```\n\
             **In May**\n```5.0 BAN - by bob```\n\
             **All Time**\n```100.0 BAN - by alice```"
        );
    }

    #[tokio::test]
    async fn test_no_stats_sets_cooldown() {
        let fixture = Fixture::new();
        let commands = fixture.commands();

        commands.toptips(&guild_invocation(), Utc::now()).await.unwrap();
        commands.toptips(&guild_invocation(), Utc::now()).await.unwrap();

        let sent = fixture.messenger.sent();
        assert_eq!(sent.len(), 2);
        assert!(matches!(&sent[0], Sent::Text(_, text) if text == NO_SERVER_STATS));
        assert!(matches!(sent[1], Sent::Reaction(_, Reaction::Cooldown)));
        assert_eq!(fixture.store.top_tip_queries(), 1);
    }

    #[tokio::test]
    async fn test_embed_reply_does_not_set_cooldown() {
        let fixture = Fixture::new();
        fixture.store.add_user(1, "alice");
        fixture.store.add_stats(stats_row(1, GUILD, 1, 1.0, 1.0));
        let commands = fixture.commands();

        commands.toptips(&guild_invocation(), Utc::now()).await.unwrap();
        commands.toptips(&guild_invocation(), Utc::now()).await.unwrap();

        let embeds = fixture
            .messenger
            .sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Embed(..)))
            .count();
        assert_eq!(embeds, 2);
    }

    #[tokio::test]
    async fn test_other_server_rows_ignored() {
        let fixture = Fixture::new();
        fixture.store.add_user(1, "alice");
        fixture.store.add_stats(stats_row(1, GUILD + 1, 1, 1.0, 1.0));

        fixture
            .commands()
            .toptips(&guild_invocation(), Utc::now())
            .await
            .unwrap();

        assert_eq!(fixture.messenger.only_text(), NO_SERVER_STATS);
    }
}
