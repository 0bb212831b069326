//! Credential flow - the exchange that populates the session store.
//!
//! On success the session is replaced wholesale with the identity
//! collaborator's verdict. On any failure the session is left untouched
//! and the caller gets one generic error: the flow deliberately does
//! not distinguish rejected credentials from transport failures, so a
//! caller cannot probe for account existence. The underlying cause is
//! logged for operators only.
//!
//! Re-submission debouncing is the caller's policy; this flow does not
//! serialize concurrent submissions.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::session::UserIdentity;
use crate::ports::{Credentials, IdentityProvider};

use super::SessionStore;

/// Generic authentication failure surfaced to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("authentication failed")]
pub struct AuthenticationFailed;

/// Orchestrates credential submission against the identity collaborator.
pub struct CredentialFlow {
    identity: Arc<dyn IdentityProvider>,
    sessions: Arc<SessionStore>,
}

impl CredentialFlow {
    pub fn new(identity: Arc<dyn IdentityProvider>, sessions: Arc<SessionStore>) -> Self {
        Self { identity, sessions }
    }

    /// Submits credentials and, on success, signs the user in.
    pub async fn submit(
        &self,
        credentials: Credentials,
    ) -> Result<UserIdentity, AuthenticationFailed> {
        let outcome = match self.identity.authenticate(&credentials).await {
            Ok(outcome) => outcome,
            Err(err) => {
                // Cause stays in the logs; the caller sees one generic failure.
                debug!(error = %err, "credential exchange failed");
                return Err(AuthenticationFailed);
            }
        };

        let user = outcome.user;
        if let Err(err) = self.sessions.login(user.clone(), outcome.membership_valid) {
            // The exchange succeeded, so the in-memory session is live;
            // only durability across a restart is lost.
            warn!(error = %err, "session persisted state could not be written");
        }
        info!(user_id = %user.id, "user signed in");
        Ok(user)
    }
}
