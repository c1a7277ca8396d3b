use serde::{Deserialize, Serialize};

use crate::models::identity::Identity;

/// View data shared by the informational pages and the login and
/// registration forms. `user` is `None` for anonymous visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub user: Option<Identity>,
}

impl PageView {
    pub fn new(user: Option<Identity>) -> Self {
        Self { user }
    }
}

/// View data for the forgot-password form before anything is submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordView {
    pub error: Option<String>,
    pub success: Option<String>,
}
