use sqlx::PgPool;

use crate::db::models::User;

/// Look up a registered user by Discord id
pub async fn get_by_discord_id(pool: &PgPool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Store the user's current display name, if it changed
pub async fn update_name(pool: &PgPool, id: i64, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET name = $2 WHERE id = $1 AND name IS DISTINCT FROM $2")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}
