//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum accepted length for an external user identifier.
const USER_ID_MAX_LEN: usize = 128;

/// Unique identifier for a user, as issued by the identity collaborator.
///
/// The identity service owns the id format (it may be a UUID, a numeric
/// string, or an opaque token), so this type validates shape only: non-empty
/// and bounded length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a UserId from an externally issued identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty("user_id"));
        }
        if id.len() > USER_ID_MAX_LEN {
            return Err(ValidationError::too_long("user_id", USER_ID_MAX_LEN));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_identifier() {
        let id = UserId::new("user-123").unwrap();
        assert_eq!(id.as_str(), "user-123");
        assert_eq!(id.to_string(), "user-123");
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
    }

    #[test]
    fn rejects_oversized_identifier() {
        let long = "x".repeat(USER_ID_MAX_LEN + 1);
        assert!(UserId::new(long).is_err());
    }

    #[test]
    fn serializes_transparently() {
        let id = UserId::new("user-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user-123\"");
    }
}
