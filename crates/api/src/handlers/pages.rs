//! # Page Handlers
//!
//! Read-only pages: the landing and privacy pages, plus the empty login,
//! registration and forgot-password forms. The booking gate redirects
//! anonymous visitors to the login page served here.

use axum::Json;
use readygolf_core::models::page::{ForgotPasswordView, PageView};

use crate::middleware::session::CurrentSession;

pub async fn home(CurrentSession(session): CurrentSession) -> Json<PageView> {
    Json(PageView::new(session.identity))
}

pub async fn privacy(CurrentSession(session): CurrentSession) -> Json<PageView> {
    Json(PageView::new(session.identity))
}

pub async fn login_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    Json(PageView::new(session.identity))
}

pub async fn register_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    Json(PageView::new(session.identity))
}

pub async fn forgot_password_page() -> Json<ForgotPasswordView> {
    Json(ForgotPasswordView::default())
}
