//! User Name Value Object
//!
//! The login handle. Two forms are kept:
//! - `original`: NFKC-normalized and trimmed, as the user typed it
//! - `canonical`: `original` lower-cased; uniqueness and lookup use this
//!
//! ## Invariants
//! - 1 to [`USER_NAME_MAX_LENGTH`] characters after normalization
//! - no whitespace or control characters

use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username is required")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username must not contain spaces or control characters")]
    InvalidCharacter,
}

#[derive(Clone, PartialEq, Eq)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let original = normalized.trim().to_string();

        if original.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = original.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if original
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(UserNameError::InvalidCharacter);
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rebuild from a stored display form
    pub fn from_db(original: &str) -> Result<Self, UserNameError> {
        Self::new(original)
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserName({})", self.original)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
