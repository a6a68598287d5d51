//! API error types and JSON error response formatting.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum ApiError {
    /// Body missing or not the expected JSON. Carries the rejection's status
    /// (400, 413, 415 or 422).
    InvalidBody {
        status: StatusCode,
        message: String,
        details: Option<String>,
    },
    /// 404 Not Found - no such route.
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::InvalidBody {
                status,
                message,
                details,
            } => (status, invalid_body_code(status), message, details),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
            details: details.map(serde_json::Value::String),
        };

        (status, Json(body)).into_response()
    }
}

fn invalid_body_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable_entity",
        _ => "bad_request",
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: r#"Please send a JSON body like {"message": "hello"}."#.to_string(),
            details: Some(rejection.body_text()),
        }
    }
}
