use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur in service layer operations.
///
/// The state core never fails (storage problems degrade to defaults or keep
/// the optimistic update); only the HTTP edge, validation and id lookups,
/// produces errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::InvalidInput(format!("validation failed: {err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
