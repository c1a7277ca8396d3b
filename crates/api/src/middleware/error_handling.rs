//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}` so every handler fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use readygolf_core::errors::GolfError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use readygolf_api::middleware::error_handling::AppError;
/// use readygolf_core::errors::GolfError;
///
/// async fn handler(username: Option<String>) -> Result<Json<String>, AppError> {
///     let username = username
///         .ok_or_else(|| AppError(GolfError::NotFound("User not found.".to_string())))?;
///     Ok(Json(username))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub GolfError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GolfError::NotFound(_) => StatusCode::NOT_FOUND,
            GolfError::Validation(_) => StatusCode::BAD_REQUEST,
            GolfError::Authentication(_) => StatusCode::UNAUTHORIZED,
            GolfError::Authorization(_) => StatusCode::FORBIDDEN,
            GolfError::Conflict(_) => StatusCode::CONFLICT,
            GolfError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            GolfError::InvalidSchedule(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GolfError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GolfError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details stay in the log
        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<GolfError> for AppError {
    fn from(err: GolfError) -> Self {
        AppError(err)
    }
}

/// Wraps repository failures as [`GolfError::Database`].
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(GolfError::Database(err))
    }
}
