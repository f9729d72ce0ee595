//! Application Error
//!
//! [`AppError`] is what actually gets rendered. `AuthError` and `TodoError`
//! convert into it at the response boundary; value objects may build one
//! directly for policy violations.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Shown to clients in place of any server-side detail
pub const GENERIC_SERVER_MESSAGE: &str = "Internal server error";

type Message = Cow<'static, str>;
type Source = Box<dyn Error + Send + Sync + 'static>;

/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::bad_request("Password is required")
///     .with_action("Please enter a password");
/// assert_eq!(err.kind(), ErrorKind::BadRequest);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Message,
    action: Option<Message>,
    /// Logged, never rendered
    source: Option<Source>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Message>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    pub fn bad_request(message: impl Into<Message>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<Message>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<Message>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Hint for the client, rendered as `action`
    pub fn with_action(mut self, action: impl Into<Message>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Full message, including server-side detail
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message safe to send; server errors collapse to [`GENERIC_SERVER_MESSAGE`]
    pub fn public_message(&self) -> &str {
        if self.is_server_error() {
            GENERIC_SERVER_MESSAGE
        } else {
            &self.message
        }
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
