//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid identity service URL")]
    InvalidIdentityUrl,

    #[error("Invalid media host URL")]
    InvalidMediaUrl,

    #[error("Upload folder must not be empty")]
    EmptyUploadFolder,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session state directory must not be empty")]
    EmptyStateDir,
}
