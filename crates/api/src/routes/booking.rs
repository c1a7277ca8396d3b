use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/booking",
        get(handlers::booking::show_booking).post(handlers::booking::submit_booking),
    )
}
