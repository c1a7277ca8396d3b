use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Inserts a new user. Returns `None` when the username is already taken.
pub async fn create_user(
    pool: &Pool<Postgres>,
    username: &str,
    password_hash: &str,
) -> Result<Option<DbUser>> {
    tracing::debug!("Creating user: username={}", username);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (username, password_hash)
        VALUES ($1, $2)
        ON CONFLICT (username) DO NOTHING
        RETURNING id, username, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    match &user {
        Some(u) => tracing::debug!("User created successfully: id={}", u.id),
        None => tracing::debug!("Username already taken: {}", username),
    }

    Ok(user)
}

pub async fn get_user_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by username: {}", username);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replaces the stored hash. Returns `false` if no such user exists.
pub async fn update_password_hash(
    pool: &Pool<Postgres>,
    username: &str,
    password_hash: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $2
        WHERE username = $1
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
