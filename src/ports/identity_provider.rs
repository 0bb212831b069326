//! Identity provider port - credential exchange with the identity service.
//!
//! The core never inspects passwords or tokens itself; it submits
//! credentials and trusts the collaborator's verdict.
//!
//! # Contract
//!
//! Implementations must:
//! - Return the authenticated user and membership validity on success
//! - Return `IdentityError::Rejected` for refused credentials
//! - Return `IdentityError::Unavailable` for transport failures
//! - Return `IdentityError::Malformed` when the response cannot be decoded

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::domain::session::UserIdentity;

/// Credentials submitted by the end user.
///
/// The password is wrapped in [`SecretString`] so it is redacted from
/// debug output and logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }
}

/// Successful credential exchange: who the user is and whether their
/// membership is currently valid.
#[derive(Debug, Clone)]
pub struct IdentitySession {
    pub user: UserIdentity,
    pub membership_valid: bool,
}

/// Errors from the identity collaborator.
///
/// The credential flow collapses all of these into one generic failure
/// before anything reaches the end user; the distinction exists for
/// logging and operator diagnostics only.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The collaborator refused the credentials.
    #[error("credentials rejected")]
    Rejected,

    /// The collaborator answered with a body this core cannot decode.
    #[error("malformed identity response: {0}")]
    Malformed(String),

    /// The collaborator could not be reached or answered with a
    /// non-auth failure.
    #[error("identity service unavailable: {0}")]
    Unavailable(String),
}

/// Port for exchanging credentials against the identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate the given credentials.
    async fn authenticate(&self, credentials: &Credentials)
        -> Result<IdentitySession, IdentityError>;
}
