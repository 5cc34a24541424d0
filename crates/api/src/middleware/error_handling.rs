//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use talentsync_core::errors::TalentError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use talentsync_api::middleware::error_handling::AppError;
/// use talentsync_core::errors::TalentError;
///
/// async fn handler(name: String) -> Result<Json<String>, AppError> {
///     if name.is_empty() {
///         return Err(AppError(TalentError::Validation("name is required".to_string())));
///     }
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TalentError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TalentError::Validation(_) | TalentError::Index(_) | TalentError::Capacity(_) => {
                StatusCode::BAD_REQUEST
            }
            TalentError::Authorization(_) => StatusCode::FORBIDDEN,
            TalentError::NotFound(_) => StatusCode::NOT_FOUND,
            TalentError::Network(_) | TalentError::Dispatch(_) => StatusCode::BAD_GATEWAY,
            TalentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `TalentResult` inside handlers
impl From<TalentError> for AppError {
    fn from(err: TalentError) -> Self {
        AppError(err)
    }
}

/// Maps a TalentError straight to an HTTP response
pub fn map_error(err: TalentError) -> Response {
    AppError(err).into_response()
}
