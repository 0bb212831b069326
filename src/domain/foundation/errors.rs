//! Validation errors for foundation value objects.

use thiserror::Error;

/// Errors raised when constructing a value object from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max}")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    pub fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }

    pub fn too_long(field: &'static str, max: usize) -> Self {
        Self::TooLong { field, max }
    }
}
