//! Mock media store for tests.
//!
//! Keeps stored objects in memory, records every received upload so
//! tests can assert dispatch behavior, and supports failure injection
//! per MIME type or for all uploads.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::ports::{IngestedMedia, MediaStore, MediaStoreError, ResourceKind};

/// One upload request as seen by the mock host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedUpload {
    pub mime_type: String,
    pub folder: String,
    pub size: u64,
}

enum FailureMode {
    None,
    All(String),
    ForMime { mime_type: String, message: String },
    Empty,
}

/// Mock implementation of [`MediaStore`].
pub struct MockMediaStore {
    objects: RwLock<HashMap<String, IngestedMedia>>,
    received: RwLock<Vec<ReceivedUpload>>,
    failure: FailureMode,
}

impl Default for MockMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMediaStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            received: RwLock::new(Vec::new()),
            failure: FailureMode::None,
        }
    }

    /// Fails every upload with the given host message.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = FailureMode::All(message.into());
        self
    }

    /// Fails uploads of one MIME type, accepting everything else.
    pub fn failing_for_mime(
        mut self,
        mime_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.failure = FailureMode::ForMime {
            mime_type: mime_type.into(),
            message: message.into(),
        };
        self
    }

    /// Acknowledges uploads without returning a result.
    pub fn returning_empty(mut self) -> Self {
        self.failure = FailureMode::Empty;
        self
    }

    /// Every upload request received so far, in arrival order.
    pub fn received(&self) -> Vec<ReceivedUpload> {
        self.received
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// True if an object with this id is currently stored.
    pub fn contains(&self, remote_id: &str) -> bool {
        self.objects
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(remote_id)
    }

    fn detect_kind(mime_type: &str) -> ResourceKind {
        if mime_type.starts_with("image/") {
            ResourceKind::Image
        } else if mime_type.starts_with("video/") {
            ResourceKind::Video
        } else {
            ResourceKind::Raw
        }
    }
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: &str,
        folder: &str,
    ) -> Result<IngestedMedia, MediaStoreError> {
        self.received
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(ReceivedUpload {
                mime_type: mime_type.to_string(),
                folder: folder.to_string(),
                size: bytes.len() as u64,
            });

        match &self.failure {
            FailureMode::All(message) => {
                return Err(MediaStoreError::Upstream(message.clone()));
            }
            FailureMode::ForMime {
                mime_type: failing,
                message,
            } if failing == mime_type => {
                return Err(MediaStoreError::Upstream(message.clone()));
            }
            FailureMode::Empty => return Err(MediaStoreError::EmptyResponse),
            _ => {}
        }

        let kind = Self::detect_kind(mime_type);
        let remote_id = format!("{}/{}", folder, Uuid::new_v4());
        let format = mime_type.split('/').nth(1).unwrap_or("bin").to_string();
        let media = IngestedMedia {
            remote_id: remote_id.clone(),
            secure_url: format!("https://media.test/{remote_id}.{format}"),
            format,
            bytes: bytes.len() as u64,
            resource_kind: kind,
            width: matches!(kind, ResourceKind::Image).then_some(1024),
            height: matches!(kind, ResourceKind::Image).then_some(768),
        };

        self.objects
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(remote_id, media.clone());
        Ok(media)
    }

    async fn destroy(&self, remote_id: &str) -> Result<(), MediaStoreError> {
        // Idempotent: removing an absent id is fine.
        self.objects
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(remote_id);
        Ok(())
    }
}
