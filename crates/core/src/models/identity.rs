use serde::{Deserialize, Serialize};

/// The authenticated principal attached to a session.
///
/// Created on registration, attached to a session on login and detached again
/// on logout. `username` is unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
}

impl Identity {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
