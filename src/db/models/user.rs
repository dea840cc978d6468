use chrono::{DateTime, Utc};

/// A person registered with the tip bot
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Discord user id
    pub user_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
