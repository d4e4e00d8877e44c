pub mod auth;
pub mod browse;
pub mod documents;
pub mod folders;
pub mod health;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::application::error::ServiceError;

/// Handler-boundary error: every service failure becomes a user-facing
/// JSON message; internal detail is logged, never echoed.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(&'static str),
    PayloadTooLarge,
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "upload too large".to_string())
            }
            ApiError::Service(err) => match err {
                ServiceError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
                ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                ServiceError::Forbidden(_) => (StatusCode::FORBIDDEN, err.to_string()),
                ServiceError::Storage(e) => {
                    error!(error = ?e, "storage_backend_failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
                }
                ServiceError::Internal(e) => {
                    error!(error = ?e, "internal_failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
                }
            },
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
