//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use scangate_domain::error::ScanGateError;

/// Message returned for every failure the caller cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Scanner validation failed";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps handler failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the application layer.
    Domain(ScanGateError),
    /// The request body was not the JSON document the endpoint expects.
    MalformedBody(serde_json::Error),
    /// The request body could not be read (too large, connection dropped, …).
    UnreadableBody(BytesRejection),
    /// Well-formed JSON the endpoint cannot work with.
    UnexpectedBody(String),
}

impl From<ScanGateError> for ApiError {
    fn from(err: ScanGateError) -> Self {
        Self::Domain(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(err: BytesRejection) -> Self {
        Self::UnreadableBody(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(ScanGateError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(ScanGateError::Unauthorized(err)) => {
                (StatusCode::FORBIDDEN, err.to_string())
            }
            Self::Domain(ScanGateError::Storage(err)) => {
                tracing::error!(error = %err, "scanner validation error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            Self::MalformedBody(err) => {
                tracing::error!(error = %err, "scanner validation error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            Self::UnreadableBody(err) => {
                tracing::error!(error = %err, status = %err.status(), "scanner validation error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            Self::UnexpectedBody(reason) => {
                tracing::error!(%reason, "scanner validation error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
