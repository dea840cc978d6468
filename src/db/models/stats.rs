use chrono::{DateTime, Utc};

/// Tipping aggregates for one user in one server, maintained by the tip processor
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Stats {
    pub user_id: i64,
    pub server_id: i64,
    pub total_tips: i64,
    pub total_tipped_amount: f64,
    pub top_tip: f64,
    pub top_tip_month: f64,
    pub top_tip_month_at: DateTime<Utc>,
    pub top_tip_day: f64,
    pub top_tip_day_at: DateTime<Utc>,
}

impl Stats {
    pub fn has_tips(&self) -> bool {
        self.total_tips > 0
    }
}

/// The biggest tip in a window together with who sent it
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TopTip {
    pub amount: f64,
    pub user_name: String,
}

/// Which top-tip column to rank by, and how far back a row may be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopTipWindow {
    AllTime,
    /// Calendar month starting at `since`
    Month { since: DateTime<Utc> },
    /// Trailing day starting at `since`
    Day { since: DateTime<Utc> },
}

impl TopTipWindow {
    /// Amount this window ranks a row by, or `None` if the row's tip is outside it
    pub fn amount_of(&self, stats: &Stats) -> Option<f64> {
        match *self {
            TopTipWindow::AllTime => Some(stats.top_tip),
            TopTipWindow::Month { since } => {
                (stats.top_tip_month_at >= since).then_some(stats.top_tip_month)
            }
            TopTipWindow::Day { since } => {
                (stats.top_tip_day_at >= since).then_some(stats.top_tip_day)
            }
        }
    }
}
