//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the ReadyGolf server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SESSION_TTL_HOURS`: Lifetime of a login session (default: 24)
//! - `SESSION_COOKIE_SECURE`: Send the session cookie over HTTPS only (default: false)
//! - `TEE_TIME_START` / `TEE_TIME_END`: First and last tee time, `HH:MM` (default: 08:00 / 16:00)
//! - `TEE_TIME_INTERVAL_MINUTES`: Minutes between tee times (default: 20)

use chrono::Duration;
use eyre::{Result, WrapErr};
use readygolf_core::models::{schedule::Schedule, time_slot::TimeSlot};
use std::env;
use tracing::Level;

/// Configuration for the ReadyGolf API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use readygolf_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// How long a login session stays valid
    pub session_ttl: Duration,

    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,

    /// Daily tee-time schedule
    pub schedule: Schedule,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT or SESSION_TTL_HOURS value cannot be parsed
    /// - The tee-time variables do not describe a valid schedule
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default());

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Session settings
        let session_ttl_hours: i64 = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .wrap_err("Invalid SESSION_TTL_HOURS value")?;
        if session_ttl_hours <= 0 {
            eyre::bail!("SESSION_TTL_HOURS must be positive");
        }
        let secure_cookies = env::var("SESSION_COOKIE_SECURE")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        // Tee-time settings
        let schedule = parse_schedule(
            env::var("TEE_TIME_START").ok().as_deref(),
            env::var("TEE_TIME_END").ok().as_deref(),
            env::var("TEE_TIME_INTERVAL_MINUTES").ok().as_deref(),
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            session_ttl: Duration::hours(session_ttl_hours),
            secure_cookies,
            schedule,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(value: &str) -> Level {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Builds the tee-time schedule, falling back to the default for unset values.
fn parse_schedule(
    start: Option<&str>,
    end: Option<&str>,
    interval: Option<&str>,
) -> Result<Schedule> {
    let defaults = Schedule::default();

    let start = match start {
        Some(raw) => raw.parse::<TimeSlot>().wrap_err("Invalid TEE_TIME_START value")?,
        None => TimeSlot::from_minutes(defaults.start_minutes()),
    };
    let end = match end {
        Some(raw) => raw.parse::<TimeSlot>().wrap_err("Invalid TEE_TIME_END value")?,
        None => TimeSlot::from_minutes(defaults.end_minutes()),
    };
    let interval = match interval {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err("Invalid TEE_TIME_INTERVAL_MINUTES value")?,
        None => defaults.interval_minutes(),
    };

    let schedule = Schedule::new(start.minutes_of_day(), end.minutes_of_day(), interval)?;
    Ok(schedule)
}
