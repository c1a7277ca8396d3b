use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/privacy", get(handlers::pages::privacy))
}
