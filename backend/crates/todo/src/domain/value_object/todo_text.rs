//! Todo Text Value Object
//!
//! Trimmed, non-empty, bounded length. Stored exactly as normalized here.

use std::fmt;
use thiserror::Error;

pub const TODO_TEXT_MAX_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoTextError {
    #[error("Todo text is required")]
    Empty,

    #[error("Todo text must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

#[derive(Clone, PartialEq, Eq)]
pub struct TodoText(String);

impl TodoText {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TodoTextError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TodoTextError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual > TODO_TEXT_MAX_LENGTH {
            return Err(TodoTextError::TooLong {
                max: TODO_TEXT_MAX_LENGTH,
                actual,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a stored value without re-validating
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TodoText").field(&self.0).finish()
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_is_trimmed() {
        assert_eq!(TodoText::new("  buy milk \n").unwrap().as_str(), "buy milk");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(TodoText::new("").unwrap_err(), TodoTextError::Empty);
        assert_eq!(TodoText::new(" \t ").unwrap_err(), TodoTextError::Empty);
    }

    #[test]
    fn test_length_limit_counts_chars() {
        assert!(TodoText::new("é".repeat(TODO_TEXT_MAX_LENGTH)).is_ok());
        assert!(matches!(
            TodoText::new("a".repeat(TODO_TEXT_MAX_LENGTH + 1)),
            Err(TodoTextError::TooLong { actual, .. }) if actual == TODO_TEXT_MAX_LENGTH + 1
        ));
    }
}
