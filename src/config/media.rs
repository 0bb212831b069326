//! Media host configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::ValidationError;

fn default_upload_folder() -> String {
    "uploads".to_string()
}

/// Configuration for the durable media host collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Base URL of the media host API.
    pub base_url: String,

    /// API key for the media host.
    pub api_key: SecretString,

    /// Logical folder uploads are stored under.
    #[serde(default = "default_upload_folder")]
    pub upload_folder: String,
}

impl MediaConfig {
    /// Validates the media section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("media.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidMediaUrl);
        }
        if self.upload_folder.trim().is_empty() {
            return Err(ValidationError::EmptyUploadFolder);
        }
        Ok(())
    }
}
