//! # Error Handling Middleware
//!
//! Maps the planner's domain errors to HTTP status codes and JSON error
//! bodies, so every handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use classplan_core::errors::PlanError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use classplan_api::middleware::error_handling::AppError;
/// use classplan_core::errors::PlanError;
///
/// async fn handler(end: u32) -> Result<Json<u32>, AppError> {
///     if end > 23 {
///         return Err(AppError(PlanError::Validation("end past 23".to_string())));
///     }
///     Ok(Json(end))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub PlanError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlanError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `PlanResult` inside handlers
impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PlanError::Internal(err))
    }
}
