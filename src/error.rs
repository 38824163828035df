//! Application error type and its HTTP representation.
//!
//! Every handler returns [`AppError`] on failure. Errors are rendered as a JSON
//! envelope:
//!
//! ```json
//! { "error": { "code": "internal_error", "message": "Database error", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::infrastructure::cache::CacheError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        tracing::error!("Cache error: {}", e);
        AppError::internal("Cache error", json!({ "reason": e.to_string() }))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        tracing::error!("Serialization error: {}", e);
        AppError::internal("Serialization error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_internal_error_envelope() {
        let response = AppError::internal("Database error", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "internal_error");
        assert_eq!(json["error"]["message"], "Database error");
    }

    #[test]
    fn test_cache_error_maps_to_internal() {
        let err: AppError = CacheError::Operation("GET failed".to_string()).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Listing not found", json!({ "id": 7 }));
        assert_eq!(err.to_string(), "Listing not found");
    }
}
