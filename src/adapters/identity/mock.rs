//! Mock identity provider for tests and local development.
//!
//! Stores a map of accounts. Credentials that match an account
//! authenticate as its user; anything else is rejected. A forced error
//! overrides every exchange for error-path testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::domain::session::UserIdentity;
use crate::ports::{Credentials, IdentityError, IdentityProvider, IdentitySession};

struct Account {
    password: String,
    user: UserIdentity,
    membership_valid: bool,
}

/// Mock implementation of [`IdentityProvider`].
#[derive(Default)]
pub struct MockIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    force_error: RwLock<Option<IdentityError>>,
}

impl MockIdentityProvider {
    /// Creates an empty mock with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account the mock will authenticate.
    pub fn with_account(
        self,
        email: impl Into<String>,
        password: impl Into<String>,
        user: UserIdentity,
        membership_valid: bool,
    ) -> Self {
        self.accounts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                email.into(),
                Account {
                    password: password.into(),
                    user,
                    membership_valid,
                },
            );
        self
    }

    /// Forces every exchange to fail with the given error.
    pub fn with_error(self, error: IdentityError) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    /// Clears the forced error and returns to account lookup.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<IdentitySession, IdentityError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }

        let accounts = self.accounts.read().unwrap_or_else(|e| e.into_inner());
        match accounts.get(&credentials.email) {
            Some(account) if account.password == *credentials.password.expose_secret() => {
                Ok(IdentitySession {
                    user: account.user.clone(),
                    membership_valid: account.membership_valid,
                })
            }
            _ => Err(IdentityError::Rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::session::UserRole;

    fn user() -> UserIdentity {
        UserIdentity::new(UserId::new("u-1").unwrap(), "Joan", "Clarke", UserRole::Member)
    }

    #[tokio::test]
    async fn known_account_authenticates() {
        let provider =
            MockIdentityProvider::new().with_account("joan@example.com", "pw", user(), true);

        let outcome = provider
            .authenticate(&Credentials::new("joan@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(outcome.user, user());
        assert!(outcome.membership_valid);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let provider =
            MockIdentityProvider::new().with_account("joan@example.com", "pw", user(), true);

        let result = provider
            .authenticate(&Credentials::new("joan@example.com", "nope"))
            .await;
        assert!(matches!(result, Err(IdentityError::Rejected)));
    }

    #[tokio::test]
    async fn unknown_account_is_rejected() {
        let provider = MockIdentityProvider::new();
        let result = provider
            .authenticate(&Credentials::new("ghost@example.com", "pw"))
            .await;
        assert!(matches!(result, Err(IdentityError::Rejected)));
    }

    #[tokio::test]
    async fn forced_error_overrides_account_lookup() {
        let provider = MockIdentityProvider::new()
            .with_account("joan@example.com", "pw", user(), true)
            .with_error(IdentityError::Unavailable("down".to_string()));

        let result = provider
            .authenticate(&Credentials::new("joan@example.com", "pw"))
            .await;
        assert!(matches!(result, Err(IdentityError::Unavailable(_))));

        provider.clear_error();
        let result = provider
            .authenticate(&Credentials::new("joan@example.com", "pw"))
            .await;
        assert!(result.is_ok());
    }
}
