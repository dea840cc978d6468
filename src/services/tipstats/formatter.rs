use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serenity::all::UserId;

use crate::config::Branding;
use crate::constants::embeds::{brand_color, brand_icon, code_block, section};
use crate::db::models::{Stats, TopTip};
use crate::services::messenger::TipEmbed;
use crate::utils::formatting::{format_currency, mention_user};

pub const BIGGEST_TIPS_TITLE: &str = "Biggest Tips";

pub const NO_SERVER_STATS: &str = "There are no stats for this server yet. Send some tips first!";

pub const COOLDOWN_NOTICE: &str =
    "Why don't you wait awhile before trying to get your tipstats again";

/// First instant of the calendar month containing `now`
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .unwrap_or_else(|| now.date_naive())
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Start of the trailing 24 hours ending at `now`
pub fn day_ago(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(24)
}

/// Reply to `tipstats`
pub fn personal_stats_message(author_id: UserId, stats: Option<&Stats>, branding: &Branding) -> String {
    let mention = mention_user(author_id);

    match stats.filter(|s| s.has_tips()) {
        None => format!(
            "{} You haven't sent any tips in this server yet, tip some people and then check your stats later",
            mention
        ),
        Some(stats) => format!(
            "{} You have sent **{}** tips totaling **{}**. Your biggest tip of all time is **{}**",
            mention,
            stats.total_tips,
            format_currency(stats.total_tipped_amount, &branding.currency_symbol),
            format_currency(stats.top_tip, &branding.currency_symbol),
        ),
    }
}

/// One labelled block of the biggest-tips embed
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedSection {
    pub label: String,
    pub value: String,
}

impl EmbedSection {
    pub fn top_tip(label: impl Into<String>, tip: &TopTip, branding: &Branding) -> Self {
        Self {
            label: label.into(),
            value: format!(
                "{} - by {}",
                format_currency(tip.amount, &branding.currency_symbol),
                tip.user_name
            ),
        }
    }

    pub fn render(&self) -> String {
        section(&self.label, &code_block(&self.value))
    }
}

/// Join sections with a single newline between each present section
pub fn render_sections(sections: &[EmbedSection]) -> String {
    sections
        .iter()
        .map(EmbedSection::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the embed for `toptips`: last 24 hours and this month when present, then all time
pub fn biggest_tips_embed(
    day: Option<&TopTip>,
    month: Option<&TopTip>,
    all_time: &TopTip,
    now: DateTime<Utc>,
    branding: &Branding,
) -> TipEmbed {
    let mut sections = Vec::with_capacity(3);

    if let Some(tip) = day {
        sections.push(EmbedSection::top_tip("Last 24 Hours", tip, branding));
    }
    if let Some(tip) = month {
        sections.push(EmbedSection::top_tip(
            format!("In {}", now.format("%B")),
            tip,
            branding,
        ));
    }
    sections.push(EmbedSection::top_tip("All Time", all_time, branding));

    TipEmbed {
        author: BIGGEST_TIPS_TITLE.to_string(),
        icon_url: brand_icon(branding.banano).to_string(),
        colour: brand_color(branding.banano),
        description: render_sections(&sections),
    }
}
