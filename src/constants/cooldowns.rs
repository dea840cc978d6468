use std::time::Duration;

/// How long `tipstats` and `toptips` stay quiet after answering (5 minutes)
pub const STATS_COOLDOWN_SECONDS: u64 = 5 * 60;

/// How often expired cooldown markers are swept
pub const COOLDOWN_PURGE_INTERVAL_SECONDS: u64 = 60;

pub fn stats_cooldown() -> Duration {
    Duration::from_secs(STATS_COOLDOWN_SECONDS)
}
