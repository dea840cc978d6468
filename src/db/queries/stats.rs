use sqlx::PgPool;

use crate::db::models::{Stats, TopTip, TopTipWindow};

/// Get one user's stats in a server
pub async fn get_for_user(
    pool: &PgPool,
    user_id: i64,
    server_id: i64,
) -> Result<Option<Stats>, sqlx::Error> {
    sqlx::query_as::<_, Stats>(
        r#"
        SELECT user_id, server_id, total_tips, total_tipped_amount,
               top_tip, top_tip_month, top_tip_month_at, top_tip_day, top_tip_day_at
        FROM stats
        WHERE user_id = $1 AND server_id = $2
        "#,
    )
    .bind(user_id)
    .bind(server_id)
    .fetch_optional(pool)
    .await
}

/// Get the single biggest tip in a server for the given window
pub async fn top_tip(
    pool: &PgPool,
    server_id: i64,
    window: TopTipWindow,
) -> Result<Option<TopTip>, sqlx::Error> {
    match window {
        TopTipWindow::AllTime => {
            sqlx::query_as::<_, TopTip>(
                r#"
                SELECT s.top_tip AS amount, u.name AS user_name
                FROM stats s
                JOIN users u ON u.id = s.user_id
                WHERE s.server_id = $1
                ORDER BY s.top_tip DESC
                LIMIT 1
                "#,
            )
            .bind(server_id)
            .fetch_optional(pool)
            .await
        }
        TopTipWindow::Month { since } => {
            sqlx::query_as::<_, TopTip>(
                r#"
                SELECT s.top_tip_month AS amount, u.name AS user_name
                FROM stats s
                JOIN users u ON u.id = s.user_id
                WHERE s.server_id = $1 AND s.top_tip_month_at >= $2
                ORDER BY s.top_tip_month DESC
                LIMIT 1
                "#,
            )
            .bind(server_id)
            .bind(since)
            .fetch_optional(pool)
            .await
        }
        TopTipWindow::Day { since } => {
            sqlx::query_as::<_, TopTip>(
                r#"
                SELECT s.top_tip_day AS amount, u.name AS user_name
                FROM stats s
                JOIN users u ON u.id = s.user_id
                WHERE s.server_id = $1 AND s.top_tip_day_at >= $2
                ORDER BY s.top_tip_day DESC
                LIMIT 1
                "#,
            )
            .bind(server_id)
            .bind(since)
            .fetch_optional(pool)
            .await
        }
    }
}
