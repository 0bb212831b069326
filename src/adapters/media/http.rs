//! HTTP adapter for the durable media host.
//!
//! Uploads raw bytes with the declared content type and a folder query
//! parameter, and maps the host's JSON response to the reference
//! record. The host performs kind detection and adaptive quality/format
//! transformation server-side; this adapter only moves bytes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::ports::{IngestedMedia, MediaStore, MediaStoreError, ResourceKind};

/// Configuration for the media host adapter.
#[derive(Debug, Clone)]
pub struct MediaServiceConfig {
    /// Base URL of the media host API.
    pub base_url: String,

    /// API key sent as a bearer token.
    pub api_key: SecretString,
}

impl MediaServiceConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url.trim_end_matches('/'))
    }

    fn destroy_url(&self, remote_id: &str) -> String {
        format!("{}/resources/{}", self.base_url.trim_end_matches('/'), remote_id)
    }
}

impl From<&crate::config::MediaConfig> for MediaServiceConfig {
    fn from(config: &crate::config::MediaConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

/// Host response for a committed upload.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    format: String,
    bytes: u64,
    resource_type: ResourceKind,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    /// Reported by the host; informational only.
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// [`MediaStore`] backed by the media host's HTTP API.
pub struct HttpMediaStore {
    client: reqwest::Client,
    config: MediaServiceConfig,
}

impl HttpMediaStore {
    pub fn new(config: MediaServiceConfig) -> Result<Self, MediaStoreError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MediaStoreError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Extracts the host's error message from a failure response body.
    async fn upstream_error(response: reqwest::Response) -> MediaStoreError {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse { message: Some(msg) }) => MediaStoreError::Upstream(msg),
            _ => MediaStoreError::Upstream(format!("media host answered {status}")),
        }
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: &str,
        folder: &str,
    ) -> Result<IngestedMedia, MediaStoreError> {
        let response = self
            .client
            .post(self.config.upload_url())
            .query(&[("folder", folder)])
            .bearer_auth(self.config.api_key.expose_secret())
            .header(CONTENT_TYPE, mime_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| MediaStoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|_| MediaStoreError::EmptyResponse)?;
        if let Some(created_at) = body.created_at {
            debug!(public_id = %body.public_id, %created_at, "media host committed upload");
        }

        Ok(IngestedMedia {
            remote_id: body.public_id,
            secure_url: body.secure_url,
            format: body.format,
            bytes: body.bytes,
            resource_kind: body.resource_type,
            width: body.width,
            height: body.height,
        })
    }

    async fn destroy(&self, remote_id: &str) -> Result<(), MediaStoreError> {
        let response = self
            .client
            .delete(self.config.destroy_url(remote_id))
            .bearer_auth(self.config.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| MediaStoreError::Transport(e.to_string()))?;

        // 404 counts as success: the object is gone either way.
        if !response.status().is_success() && response.status() != reqwest::StatusCode::NOT_FOUND {
            return Err(Self::upstream_error(response).await);
        }
        Ok(())
    }
}
