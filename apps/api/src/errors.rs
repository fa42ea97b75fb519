use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::questions::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, diagnostic) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
                "missing or invalid principal".to_string(),
            ),
            AppError::Generation(e) if e.is_client_error() => (
                StatusCode::BAD_REQUEST,
                e.code(),
                "Invalid generation request".to_string(),
                e.to_string(),
            ),
            AppError::Generation(e @ GenerationError::PersistenceTotalFailure { .. }) => {
                tracing::error!("Question persistence failed: {e}");
                let body = Json(json!({
                    "message": "Failed to save any generated questions",
                    "error": e.to_string(),
                    "code": e.code(),
                    "savedCount": 0
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            AppError::Generation(e) => {
                tracing::error!("Question generation failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.code(),
                    "Failed to generate AI questions".to_string(),
                    e.to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
            "error": diagnostic,
            "code": code
        }));

        (status, body).into_response()
    }
}
