//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Body or query string could not be extracted; `details` carries the
    /// extractor's own explanation.
    BadRequest { message: String, details: String },
    /// Error raised by the catalog or processing layer
    Explorer(ExplorerError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest { message, details } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", message).with_details(details),
            ),
            AppError::Explorer(e) => {
                let msg = e.to_string();
                match e {
                    ExplorerError::NotFound(_) => {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                    }
                    ExplorerError::Upstream(_) => {
                        (StatusCode::BAD_GATEWAY, ApiError::new("UPSTREAM_ERROR", msg))
                    }
                    ref e if e.is_client_error() => (
                        StatusCode::BAD_REQUEST,
                        ApiError::new("INVALID_INPUT", msg),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("INTERNAL_ERROR", msg),
                    ),
                }
            }
        };

        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<ExplorerError> for AppError {
    fn from(err: ExplorerError) -> Self {
        AppError::Explorer(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request("Invalid query string", rejection.body_text())
    }
}
