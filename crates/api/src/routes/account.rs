use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/register",
            get(handlers::pages::register_page).post(handlers::account::register),
        )
        .route(
            "/login",
            get(handlers::pages::login_page).post(handlers::account::login),
        )
        .route("/logout", get(handlers::account::logout))
        .route(
            "/forgot-password",
            get(handlers::pages::forgot_password_page).post(handlers::account::forgot_password),
        )
}
