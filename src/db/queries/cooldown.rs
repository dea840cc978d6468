use sqlx::PgPool;

/// Check whether an unexpired marker exists for a key
pub async fn exists(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
    let result: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM command_cooldowns WHERE key = $1 AND expires_at > NOW())",
    )
    .bind(key)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

/// Set a marker that expires after `ttl_seconds`
pub async fn set(pool: &PgPool, key: &str, ttl_seconds: f64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO command_cooldowns (key, expires_at)
        VALUES ($1, NOW() + make_interval(secs => $2))
        ON CONFLICT (key)
        DO UPDATE SET expires_at = EXCLUDED.expires_at
        "#,
    )
    .bind(key)
    .bind(ttl_seconds)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete expired markers, returning how many were removed
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM command_cooldowns WHERE expires_at <= NOW()")
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
