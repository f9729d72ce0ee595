//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with a name whose canonical form is already stored
    #[error("Username already exists")]
    UserNameTaken,

    /// Unknown user or wrong password; the two are never distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No `Authorization` header on a protected route
    #[error("Authorization token required")]
    MissingToken,

    /// Bad signature, malformed token, or unparseable claims
    #[error("Invalid token")]
    TokenInvalid,

    #[error("Token expired")]
    TokenExpired,

    /// Username or password policy violation
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken
            | AuthError::InvalidCredentials
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::TokenInvalid | AuthError::TokenExpired => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Rejected token with invalid signature or format");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value objects report policy violations as `AppError`; keep client errors
/// client-visible and everything else internal.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
