//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `STAGEDOOR` prefix
//! with `__` (double underscore) separating nested values.
//!
//! # Example
//!
//! ```no_run
//! use stagedoor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod identity;
mod media;
mod session;

pub use error::{ConfigError, ValidationError};
pub use identity::IdentityConfig;
pub use media::MediaConfig;
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Identity service (credential exchange collaborator).
    pub identity: IdentityConfig,

    /// Media host (durable storage collaborator).
    pub media: MediaConfig,

    /// Session state persistence.
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads `STAGEDOOR`-prefixed
    /// variables, e.g. `STAGEDOOR__IDENTITY__BASE_URL=...` ->
    /// `identity.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// values cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STAGEDOOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.identity.validate()?;
        self.media.validate()?;
        self.session.validate()?;
        Ok(())
    }
}
