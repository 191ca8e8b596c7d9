use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::API_NAME;
use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// A failed endpoint: the static message shown to the client plus the cause
/// that gets logged.
///
/// Every failure answers `400 Bad Request` with `{"message": ...}`; the cause
/// only decides the log level.
#[derive(Debug)]
pub struct ApiFailure {
    pub message: &'static str,
    pub error: AppError,
}

impl ApiFailure {
    pub fn new(message: &'static str, error: impl Into<AppError>) -> Self {
        Self {
            message,
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match &self.error {
            AppError::Repository(RepositoryError::Database(e)) => {
                tracing::error!("{} {} Database error: {}", API_NAME, self.message, e);
            }
            AppError::Repository(e @ RepositoryError::IdsExhausted { .. }) => {
                tracing::error!("{} {} {}", API_NAME, self.message, e);
            }
            AppError::Repository(e @ RepositoryError::NotFound { .. }) => {
                tracing::warn!("{} {} Not found: {}", API_NAME, self.message, e);
            }
            AppError::Repository(e) => {
                tracing::warn!("{} {} Rejected: {}", API_NAME, self.message, e);
            }
            AppError::InvalidRequest(msg) => {
                tracing::warn!("{} {} Invalid request: {}", API_NAME, self.message, msg);
            }
        }

        let body = Json(json!({ "message": self.message }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Attaches an endpoint's failure message to any error the HTTP layer knows.
pub trait OrFail<T> {
    fn or_fail(self, message: &'static str) -> Result<T, ApiFailure>;
}

impl<T, E: Into<AppError>> OrFail<T> for Result<T, E> {
    fn or_fail(self, message: &'static str) -> Result<T, ApiFailure> {
        self.map_err(|e| ApiFailure::new(message, e))
    }
}
