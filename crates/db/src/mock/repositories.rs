use async_trait::async_trait;
use eyre::Result;
use mockall::mock;
use readygolf_core::models::identity::Identity;
use uuid::Uuid;

use crate::{
    models::DbUser,
    repositories::{SessionRepository, UserRepository},
};

// Mock repositories for testing
mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn create_user(&self, username: &str, password_hash: &str) -> Result<Option<DbUser>>;
        async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>>;
        async fn update_password_hash(&self, username: &str, password_hash: &str) -> Result<bool>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl SessionRepository for SessionRepo {
        async fn create_session(&self, user_id: i64) -> Result<Uuid>;
        async fn find_identity(&self, session_id: Uuid) -> Result<Option<Identity>>;
        async fn destroy_session(&self, session_id: Uuid) -> Result<()>;
        async fn prune_expired(&self) -> Result<u64>;
    }
}
