//! Persistence for users and login sessions.
//!
//! Each table has a module of plain query functions over a [`DbPool`]. The
//! API layer talks to them through the [`UserRepository`] and
//! [`SessionRepository`] traits so handlers can be exercised against mocks.

pub mod session;
pub mod user;

use async_trait::async_trait;
use chrono::Duration;
use eyre::Result;
use readygolf_core::models::identity::Identity;
use uuid::Uuid;

use crate::{DbPool, models::DbUser};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `None` when the username is already taken.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<Option<DbUser>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>>;

    /// Returns `false` when no user has that name.
    async fn update_password_hash(&self, username: &str, password_hash: &str) -> Result<bool>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Starts a session for the user and returns its id.
    async fn create_session(&self, user_id: i64) -> Result<Uuid>;

    /// The identity attached to a live session, if any.
    async fn find_identity(&self, session_id: Uuid) -> Result<Option<Identity>>;

    async fn destroy_session(&self, session_id: Uuid) -> Result<()>;

    /// Deletes expired sessions and returns how many were removed.
    async fn prune_expired(&self) -> Result<u64>;
}

pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<Option<DbUser>> {
        user::create_user(&self.pool, username, password_hash).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>> {
        user::get_user_by_username(&self.pool, username).await
    }

    async fn update_password_hash(&self, username: &str, password_hash: &str) -> Result<bool> {
        user::update_password_hash(&self.pool, username, password_hash).await
    }
}

pub struct PgSessionRepository {
    pool: DbPool,
    ttl: Duration,
}

impl PgSessionRepository {
    pub fn new(pool: DbPool, ttl: Duration) -> Self {
        Self { pool, ttl }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create_session(&self, user_id: i64) -> Result<Uuid> {
        let session = session::create_session(&self.pool, user_id, self.ttl).await?;
        Ok(session.id)
    }

    async fn find_identity(&self, session_id: Uuid) -> Result<Option<Identity>> {
        let identity = session::get_session_identity(&self.pool, session_id).await?;
        Ok(identity.map(Identity::from))
    }

    async fn destroy_session(&self, session_id: Uuid) -> Result<()> {
        session::delete_session(&self.pool, session_id).await
    }

    async fn prune_expired(&self) -> Result<u64> {
        session::delete_expired_sessions(&self.pool).await
    }
}
