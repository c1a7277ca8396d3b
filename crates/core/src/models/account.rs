use serde::{Deserialize, Serialize};

use crate::errors::{GolfError, GolfResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Form body of the forgot-password page. Field names follow the form inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default, rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub success: String,
}

/// Rejects blank credential fields with the message shown on the account forms.
pub fn require_fields(fields: &[&str]) -> GolfResult<()> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(GolfError::Validation("All fields are required.".to_string()));
    }
    Ok(())
}
