//! User identity types.
//!
//! These types represent the authenticated user as reported by the
//! identity collaborator. They carry only the claims this core uses;
//! any identity backend can populate them via the `IdentityProvider`
//! port.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::UserId;

/// Role of an authenticated user.
///
/// The set is extensible on the identity side; this core only
/// distinguishes administrators from everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum UserRole {
    Admin,
    Member,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Member => write!(f, "member"),
        }
    }
}

/// The authenticated user as established by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Identifier issued by the identity collaborator.
    pub id: UserId,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Role, as asserted by the identity collaborator.
    pub role: UserRole,
}

impl UserIdentity {
    /// Creates a new identity.
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
        }
    }

    /// Returns the user's full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if this identity carries the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
