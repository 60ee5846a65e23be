//! API error types and response envelopes.
//!
//! The wire contract is fixed: success replies are
//! `{"code": 200, "message": "Ok"}` and every failure is
//! `{"error": {"code": <status>, "message": "<reason>"}}`. Validation
//! and fetch failures surface their messages verbatim; internal errors
//! do not leak details to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use evspec_schema::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Success acknowledgement body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Ack {
    pub code: u16,
    pub message: String,
}

impl Ack {
    /// The one success reply the service sends.
    pub fn ok() -> Self {
        Self {
            code: 200,
            message: "Ok".to_string(),
        }
    }
}

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail. `code` repeats the HTTP status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// The request body did not parse as JSON.
    #[error("invalid json")]
    InvalidJson,

    /// The request kind is not in the supported set.
    #[error("unknown validationType")]
    UnknownValidationType,

    /// Name lookup, extraction, or comparison failed. The inner message
    /// is the client-facing reply.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Remote fetch or reload failed. Surfaced to the caller verbatim,
    /// not retried.
    #[error("{0}")]
    Fetch(String),

    /// Internal server error. Logged but not returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson
            | Self::UnknownValidationType
            | Self::Validation(_)
            | Self::Fetch(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                "internal error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: status.as_u16(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_pass_their_message_through() {
        let err = AppError::from(ValidationError::InvalidName);
        assert_eq!(err.to_string(), "invalid name");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_are_500() {
        assert_eq!(
            AppError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
