//! HTTP adapter for the identity service.
//!
//! Posts credentials as JSON to the identity collaborator's login
//! endpoint and maps its response DTO to the domain types. Status
//! mapping:
//!
//! - 2xx with a decodable body → `IdentitySession`
//! - 401 / 403 → `IdentityError::Rejected`
//! - any other status or transport failure → `IdentityError::Unavailable`
//! - undecodable 2xx body → `IdentityError::Malformed`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::UserId;
use crate::domain::session::{UserIdentity, UserRole};
use crate::ports::{Credentials, IdentityError, IdentityProvider, IdentitySession};

/// Configuration for the identity service adapter.
#[derive(Debug, Clone)]
pub struct IdentityServiceConfig {
    /// Base URL of the identity service, e.g. `https://id.example.com`.
    pub base_url: String,

    /// Request timeout. Defaults to 10 seconds.
    pub timeout: Option<Duration>,
}

impl IdentityServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Sets a custom request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.base_url.trim_end_matches('/'))
    }
}

impl From<&crate::config::IdentityConfig> for IdentityServiceConfig {
    fn from(config: &crate::config::IdentityConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: UserDto,
    has_valid_membership: bool,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    id: String,
    first_name: String,
    last_name: String,
    role: UserRole,
}

impl UserDto {
    fn into_domain(self) -> Result<UserIdentity, IdentityError> {
        let id = UserId::new(self.id).map_err(|e| IdentityError::Malformed(e.to_string()))?;
        Ok(UserIdentity::new(
            id,
            self.first_name,
            self.last_name,
            self.role,
        ))
    }
}

/// [`IdentityProvider`] backed by the identity service's HTTP API.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    config: IdentityServiceConfig,
}

impl HttpIdentityProvider {
    /// Creates the adapter, building a client with the configured timeout.
    pub fn new(config: IdentityServiceConfig) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(Duration::from_secs(10)))
            .build()
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<IdentitySession, IdentityError> {
        let response = self
            .client
            .post(self.config.login_url())
            .json(&LoginRequest {
                email: &credentials.email,
                password: credentials.password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(IdentityError::Rejected);
        }
        if !status.is_success() {
            debug!(%status, "identity service answered with non-auth failure");
            return Err(IdentityError::Unavailable(format!(
                "identity service answered {status}"
            )));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;

        Ok(IdentitySession {
            user: body.user.into_domain()?,
            membership_valid: body.has_valid_membership,
        })
    }
}
