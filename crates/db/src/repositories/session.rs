use crate::models::{DbSession, DbSessionIdentity};
use chrono::{Duration, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_session(
    pool: &Pool<Postgres>,
    user_id: i64,
    ttl: Duration,
) -> Result<DbSession> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let session = sqlx::query_as::<_, DbSession>(
        r#"
        INSERT INTO sessions (id, user_id, created_at, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, created_at, expires_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(now)
    .bind(now + ttl)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Session created: user_id={}", user_id);
    Ok(session)
}

/// Looks up the user behind a session. Expired sessions resolve to `None`.
pub async fn get_session_identity(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbSessionIdentity>> {
    let identity = sqlx::query_as::<_, DbSessionIdentity>(
        r#"
        SELECT u.id AS user_id, u.username
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.id = $1 AND s.expires_at > NOW()
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(identity)
}

pub async fn delete_session(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_expired_sessions(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE expires_at <= NOW()
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
