//! # Account Handlers
//!
//! Registration, login, logout and password reset. Successful registration or
//! login starts a fresh session and redirects to the landing page; logout
//! destroys the session and clears the cookie.

use std::sync::Arc;

use axum::{extract::State, response::Response, Form, Json};
use readygolf_core::{
    errors::GolfError,
    models::account::{
        require_fields, LoginRequest, RegisterRequest, ResetPasswordRequest,
        ResetPasswordResponse,
    },
    session::SessionState,
};
use tracing::{info, warn};

use crate::{
    middleware::{
        auth,
        error_handling::AppError,
        session::{redirect_with_cookie, removal_cookie, session_cookie, CurrentSession},
    },
    ApiState,
};

const HOME_PATH: &str = "/";

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    CurrentSession(session): CurrentSession,
    Form(payload): Form<RegisterRequest>,
) -> Result<Response, AppError> {
    require_fields(&[payload.username.as_str(), payload.password.as_str()])?;

    let password_hash = auth::hash_password(&payload.password)?;
    let user = state
        .users
        .create_user(&payload.username, &password_hash)
        .await?
        .ok_or_else(|| GolfError::Conflict("Username already taken".to_string()))?;

    info!(user_id = user.id, "Registered new user");
    start_session(&state, &session, user.id).await
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    CurrentSession(session): CurrentSession,
    Form(payload): Form<LoginRequest>,
) -> Result<Response, AppError> {
    let user = state.users.find_by_username(&payload.username).await?;
    let verified = match &user {
        Some(user) => auth::verify_password(&payload.password, &user.password_hash)?,
        None => auth::reject_unknown_user(&payload.password)?,
    };

    let user = match user {
        Some(user) if verified => user,
        _ => {
            warn!(username = %payload.username, "Failed login attempt");
            return Err(AppError(GolfError::Authentication(
                "Invalid credentials".to_string(),
            )));
        }
    };

    info!(user_id = user.id, "User logged in");
    start_session(&state, &session, user.id).await
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    if let Some(session_id) = session.session_id {
        state.sessions.destroy_session(session_id).await?;
    }
    if let Some(identity) = &session.identity {
        info!(user_id = identity.id, "User logged out");
    }

    Ok(redirect_with_cookie(HOME_PATH, removal_cookie()))
}

#[axum::debug_handler]
pub async fn forgot_password(
    State(state): State<Arc<ApiState>>,
    Form(payload): Form<ResetPasswordRequest>,
) -> Result<Json<ResetPasswordResponse>, AppError> {
    require_fields(&[payload.username.as_str(), payload.new_password.as_str()])?;

    let user_not_found = || AppError(GolfError::NotFound("User not found.".to_string()));

    if state.users.find_by_username(&payload.username).await?.is_none() {
        return Err(user_not_found());
    }

    let password_hash = auth::hash_password(&payload.new_password)?;
    if !state
        .users
        .update_password_hash(&payload.username, &password_hash)
        .await?
    {
        return Err(user_not_found());
    }

    info!(username = %payload.username, "Password reset");
    Ok(Json(ResetPasswordResponse {
        success: "Password reset successfully. You can now log in.".to_string(),
    }))
}

/// Replaces any existing session with a new one for `user_id`.
async fn start_session(
    state: &ApiState,
    previous: &SessionState,
    user_id: i64,
) -> Result<Response, AppError> {
    if let Some(previous_id) = previous.session_id {
        state.sessions.destroy_session(previous_id).await?;
    }

    let session_id = state.sessions.create_session(user_id).await?;
    Ok(redirect_with_cookie(
        HOME_PATH,
        session_cookie(session_id, state.secure_cookies),
    ))
}
