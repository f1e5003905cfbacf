//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field contains a NUL character, which PostgreSQL text cannot store
    ContainsNul { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::ContainsNul { field } => write!(f, "{} must not contain NUL characters", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "author",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "author exceeds maximum length of 100 characters"
        );
        assert_eq!(
            ValidationError::Empty { field: "content" }.to_string(),
            "content cannot be empty"
        );
        assert_eq!(
            ValidationError::ContainsNul { field: "author" }.to_string(),
            "author must not contain NUL characters"
        );
    }
}
