//! # ReadyGolf API
//!
//! The web server for the ReadyGolf tee-time booking service: account
//! management (register, login, logout, password reset) and the
//! session-gated booking page that lists the day's tee times.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define endpoints and URL structure
//! - **Handlers**: Implement request processing
//! - **Middleware**: Password hashing, session cookies and error mapping
//! - **Config**: Environment-based configuration
//!
//! Pages are served as JSON view data; navigation steps such as a successful
//! login or a denied booking request are `303 See Other` redirects.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication, sessions, and error handling
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use eyre::Result;
use readygolf_core::models::schedule::Schedule;
use readygolf_db::{
    repositories::{PgSessionRepository, PgUserRepository, SessionRepository, UserRepository},
    DbPool,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// User accounts
    pub users: Box<dyn UserRepository>,
    /// Login sessions
    pub sessions: Box<dyn SessionRepository>,
    /// Daily tee-time schedule
    pub schedule: Schedule,
    /// Whether the session cookie is marked `Secure`
    pub secure_cookies: bool,
}

impl ApiState {
    /// Postgres-backed state for the running server
    pub fn from_pool(config: &config::ApiConfig, db_pool: DbPool) -> Self {
        Self {
            users: Box::new(PgUserRepository::new(db_pool.clone())),
            sessions: Box::new(PgSessionRepository::new(db_pool, config.session_ttl)),
            schedule: config.schedule,
            secure_cookies: config.secure_cookies,
        }
    }
}

/// Builds the application router with all routes and request tracing
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Landing and privacy pages
        .merge(routes::pages::routes())
        // Registration, login, logout and password reset
        .merge(routes::account::routes())
        // Tee-time booking
        .merge(routes::booking::routes())
        // Health check endpoints
        .merge(routes::health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, clears out expired sessions, and serves until the
/// listener fails.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = readygolf_api::config::ApiConfig::from_env()?;
/// let db_pool = readygolf_db::create_pool(&config.database_url).await?;
/// readygolf_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_pool(&config, db_pool));

    let pruned = state.sessions.prune_expired().await?;
    if pruned > 0 {
        info!("Removed {} expired sessions", pruned);
    }

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("ReadyGolf running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
