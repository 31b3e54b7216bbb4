//! API error types and handling.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use jobsift::SiftError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Processing failure; `details` carries the underlying error text.
    Internal { message: String, details: String },
}

impl ApiError {
    /// Build an internal error from any displayable cause.
    pub fn internal(message: &str, cause: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            details: cause.to_string(),
        }
    }

    /// Replace the public message of an internal error. Bad requests keep
    /// their own message.
    pub fn context(self, message: &str) -> Self {
        match self {
            ApiError::Internal { details, .. } => ApiError::Internal {
                message: message.to_string(),
                details,
            },
            other => other,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                warn!(error = %msg, "rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: msg,
                        details: None,
                    },
                )
            }
            ApiError::Internal { message, details } => {
                error!(error = %message, details = %details, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: message,
                        details: Some(details),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<SiftError> for ApiError {
    fn from(err: SiftError) -> Self {
        match err {
            SiftError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            other => ApiError::internal("Internal server error", other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal { message, details } => write!(f, "{}: {}", message, details),
        }
    }
}

impl std::error::Error for ApiError {}
