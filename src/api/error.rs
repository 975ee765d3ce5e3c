use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::ErrorBody;
use crate::db::StoreError;
use crate::services::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    ValidationError(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    /// A stored row points at one that does not exist.
    #[error("Broken reference: {0}")]
    BrokenReference(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Why a request failed, attached to error responses for request accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureKind(pub &'static str);

impl ApiError {
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{resource} not found"))
    }

    pub fn movie_not_found() -> Self {
        Self::not_found("Movie")
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        FailureKind(match self {
            Self::NotFound(_) => "not_found",
            Self::ValidationError(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::BrokenReference(_) => "broken_reference",
            Self::InternalError(_) => "internal",
        })
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BrokenReference(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let detail = self.to_string();

        let body = match self {
            Self::ValidationError(reason) => ErrorBody {
                message: "Invalid data".to_string(),
                errors: vec![reason],
            },
            Self::BrokenReference(_) | Self::InternalError(_) => {
                tracing::error!(failure = kind.0, "{detail}");
                ErrorBody {
                    message: "Server error".to_string(),
                    errors: Vec::new(),
                }
            }
            Self::NotFound(message) | Self::Conflict(message) | Self::Unauthorized(message) => {
                ErrorBody {
                    message,
                    errors: Vec::new(),
                }
            }
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(kind);
        response
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(format!("{err:#}"))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DanglingReference { .. } => Self::BrokenReference(err.to_string()),
            StoreError::MissingUser(_) | StoreError::MissingTitle(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AuthError::UsernameTaken(_) | AuthError::EmailTaken(_) => {
                Self::Conflict(err.to_string())
            }
            AuthError::Validation(msg) => Self::ValidationError(msg),
        }
    }
}
