//! JSON error responses.
//!
//! Every failure leaves the service as
//! `{"error": {"message": <string | [string]>, "status": <code>}}`.

use crate::company::{ports::CompanyRepositoryError, services::CompanyServiceError};
use crate::job::{ports::JobRepositoryError, services::JobServiceError};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Human-readable error detail: one message or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// A single message.
    One(String),
    /// Every validation failure for a request.
    Many(Vec<String>),
}

/// Error returned by handlers and extractors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation.
    #[error("bad request: {0:?}")]
    BadRequest(ErrorMessage),

    /// No resource matched.
    #[error("{0}")]
    NotFound(String),

    /// Credentials were missing, invalid or insufficient.
    #[error("Unauthorized")]
    Unauthorized,

    /// The store failed; details are logged, not returned.
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// Builds a 400 carrying a single message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(ErrorMessage::One(message.into()))
    }

    /// Logs a store failure and hides it behind a 500.
    #[must_use]
    pub fn internal(err: &(dyn std::error::Error + Send + Sync)) -> Self {
        error!(error = %err, "store error");
        Self::Internal
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> ErrorMessage {
        match self {
            Self::BadRequest(message) => message,
            other => ErrorMessage::One(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "error": {
                "message": self.message(),
                "status": status.as_u16(),
            }
        });
        (status, Json(body)).into_response()
    }
}

impl From<JobServiceError> for ApiError {
    fn from(err: JobServiceError) -> Self {
        match err {
            JobServiceError::Validation(errors) => {
                Self::BadRequest(ErrorMessage::Many(errors.into_messages()))
            }
            JobServiceError::Repository(repository_err) => match repository_err {
                JobRepositoryError::NotFound(_) => Self::NotFound(repository_err.to_string()),
                JobRepositoryError::InvalidInput(build_err) => {
                    Self::bad_request(build_err.to_string())
                }
                JobRepositoryError::Persistence(source) => Self::internal(source.as_ref()),
            },
        }
    }
}

impl From<CompanyServiceError> for ApiError {
    fn from(err: CompanyServiceError) -> Self {
        match err {
            CompanyServiceError::Validation(errors) => {
                Self::BadRequest(ErrorMessage::Many(errors.into_messages()))
            }
            CompanyServiceError::UnknownHandle(_) => Self::NotFound(err.to_string()),
            CompanyServiceError::Repository(repository_err) => match repository_err {
                CompanyRepositoryError::NotFound(_) => Self::NotFound(repository_err.to_string()),
                CompanyRepositoryError::DuplicateCompany(_) => {
                    Self::bad_request(repository_err.to_string())
                }
                CompanyRepositoryError::InvalidInput(build_err) => {
                    Self::bad_request(build_err.to_string())
                }
                CompanyRepositoryError::Persistence(source) => Self::internal(source.as_ref()),
            },
        }
    }
}

// Undeserializable bodies and queries are listed like rule failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(ErrorMessage::Many(vec![rejection.body_text()]))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(ErrorMessage::Many(vec![rejection.body_text()]))
    }
}
