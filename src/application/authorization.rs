//! Authorization gate for admin-only surfaces.
//!
//! A three-way decision over the session store's current readers,
//! evaluated in fixed order on every access attempt: not signed in,
//! signed in without the admin role, or granted. The gate holds no
//! state of its own and never caches a decision across session
//! mutations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::session::UserRole;

use super::SessionStore;

/// Outcome of evaluating the gate for a protected surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Nobody is signed in; present an authentication prompt instead of
    /// the protected surface.
    SignInRequired,

    /// A non-admin is signed in; present a denial notice naming the
    /// identity for transparency, without revealing the surface.
    Denied {
        display_name: String,
        role: UserRole,
    },

    /// An administrator is signed in; the surface may be shown.
    Granted,
}

impl AccessDecision {
    /// Returns true if access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// User-facing message for the non-granted outcomes.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AccessDecision::SignInRequired => {
                Some("Please sign in to continue.".to_string())
            }
            AccessDecision::Denied { display_name, role } => Some(format!(
                "{} ({}) does not have permission to manage content.",
                display_name, role
            )),
            AccessDecision::Granted => None,
        }
    }
}

/// Result of guarding a protected computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// The surface ran; its result is carried here.
    Granted(T),
    /// The surface did not run; the decision says why.
    Refused(AccessDecision),
}

impl<T> GateOutcome<T> {
    /// Returns the protected result, if the surface ran.
    pub fn granted(self) -> Option<T> {
        match self {
            GateOutcome::Granted(value) => Some(value),
            GateOutcome::Refused(_) => None,
        }
    }
}

/// Decision point for admin-only mutation surfaces.
pub struct AdminGate {
    sessions: Arc<SessionStore>,
}

impl AdminGate {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// Evaluates the three-way decision against the current session.
    pub fn evaluate(&self) -> AccessDecision {
        let Some(user) = self.sessions.current_user() else {
            return AccessDecision::SignInRequired;
        };
        if !user.is_admin() {
            debug!(user_id = %user.id, role = %user.role, "admin surface refused");
            return AccessDecision::Denied {
                display_name: user.full_name(),
                role: user.role,
            };
        }
        AccessDecision::Granted
    }

    /// Runs the protected surface exactly once if and only if the gate
    /// grants access.
    pub fn guard<T>(&self, protected: impl FnOnce() -> T) -> GateOutcome<T> {
        match self.evaluate() {
            AccessDecision::Granted => GateOutcome::Granted(protected()),
            refused => GateOutcome::Refused(refused),
        }
    }
}
