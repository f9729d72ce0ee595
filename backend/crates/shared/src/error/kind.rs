//! Error Kind
//!
//! The HTTP-facing class of an error. Crate error enums pick one of these;
//! the status code and title follow from it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input, duplicate username, failed login
    BadRequest,
    /// No token presented
    Unauthorized,
    /// Token presented but rejected
    Forbidden,
    /// Absent, or owned by someone else
    NotFound,
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// Detail of these never reaches the client
    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::InternalServerError)
    }

    pub const fn is_client_error(self) -> bool {
        !self.is_server_error()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
