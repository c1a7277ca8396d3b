use chrono::{DateTime, Utc};
use readygolf_core::models::identity::Identity;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl DbUser {
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.clone())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A live session joined with the user it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct DbSessionIdentity {
    pub user_id: i64,
    pub username: String,
}

impl From<DbSessionIdentity> for Identity {
    fn from(row: DbSessionIdentity) -> Self {
        Identity::new(row.user_id, row.username)
    }
}
