//! Todo Error Types
//!
//! Todo-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Absent, or owned by another user
    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound => ErrorKind::NotFound,
            TodoError::Validation(_) => ErrorKind::BadRequest,
            TodoError::Database(_) | TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            TodoError::Database(e) => {
                tracing::error!(error = %e, "Todo database error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Todo error");
            }
        }
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
