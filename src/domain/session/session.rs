//! The session value object.

use super::UserIdentity;

/// The client-held record of who is signed in and whether their
/// membership is currently valid.
///
/// The session is the single source of truth for "is logged in" and
/// "is admin"; no other component tracks these independently. The
/// membership flag is meaningless without a user: every derived reader
/// treats it as `false` when no user is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserIdentity>,
    membership_valid: bool,
}

impl Session {
    /// An empty session: nobody signed in.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A session for an authenticated user.
    pub fn authenticated(user: UserIdentity, membership_valid: bool) -> Self {
        Self {
            user: Some(user),
            membership_valid,
        }
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// Returns true if a user is signed in.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Returns true if the signed-in user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }

    /// Returns true if a user is signed in with a valid membership.
    pub fn has_valid_membership(&self) -> bool {
        self.is_logged_in() && self.membership_valid
    }

    /// Returns the raw membership flag, independent of identity.
    ///
    /// Only the persistence layer should care about this; authorization
    /// reads go through [`Session::has_valid_membership`].
    pub fn membership_flag(&self) -> bool {
        self.membership_valid
    }

    /// Updates the membership flag without touching identity.
    pub fn set_membership_valid(&mut self, valid: bool) {
        self.membership_valid = valid;
    }
}
