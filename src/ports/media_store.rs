//! Media store port - the durable media host.
//!
//! The host auto-detects the resource kind and applies its own
//! quality/format transformations; this core only shapes the request
//! and the returned reference record.
//!
//! # Contract
//!
//! Implementations must:
//! - Store the bytes under the given logical folder and return a
//!   reference record for the stored object
//! - Return `MediaStoreError::EmptyResponse` when the host acknowledges
//!   the call but returns no usable result
//! - Treat `destroy` as idempotent: deleting an already-absent id is
//!   not an error this layer needs to distinguish

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resource kind as detected by the media host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Video,
    /// Anything the host stores without transformation.
    Raw,
}

/// Reference record for media committed to durable storage.
///
/// Opaque to this core beyond its fields; content records elsewhere in
/// the platform hold on to `remote_id` and `secure_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestedMedia {
    /// Host-assigned identifier, used for later deletion.
    pub remote_id: String,

    /// HTTPS delivery URL.
    pub secure_url: String,

    /// Stored format after any host-side transformation, e.g. `webp`.
    pub format: String,

    /// Stored size in bytes.
    pub bytes: u64,

    /// Kind as detected by the host.
    pub resource_kind: ResourceKind,

    /// Pixel width, when the host reports one.
    pub width: Option<u32>,

    /// Pixel height, when the host reports one.
    pub height: Option<u32>,
}

/// Errors from the media host.
#[derive(Debug, Clone, Error)]
pub enum MediaStoreError {
    /// The host reported a failure with a message of its own.
    #[error("{0}")]
    Upstream(String),

    /// The host acknowledged the call but returned no result.
    #[error("empty response from media store")]
    EmptyResponse,

    /// The host could not be reached.
    #[error("media store unreachable: {0}")]
    Transport(String),
}

/// Port for the durable media host.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store raw bytes under a logical folder, returning the reference
    /// record for the committed object.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: &str,
        folder: &str,
    ) -> Result<IngestedMedia, MediaStoreError>;

    /// Delete a stored object by its host-assigned id.
    async fn destroy(&self, remote_id: &str) -> Result<(), MediaStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_carries_host_message() {
        let err = MediaStoreError::Upstream("quota exceeded".to_string());
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn ingested_media_round_trips_through_json() {
        let media = IngestedMedia {
            remote_id: "albums/abc123".to_string(),
            secure_url: "https://media.example.com/albums/abc123.webp".to_string(),
            format: "webp".to_string(),
            bytes: 52_431,
            resource_kind: ResourceKind::Image,
            width: Some(1200),
            height: Some(800),
        };
        let json = serde_json::to_string(&media).unwrap();
        let back: IngestedMedia = serde_json::from_str(&json).unwrap();
        assert_eq!(back, media);
    }

    #[test]
    fn media_store_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn MediaStore) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn MediaStore>>();
    }
}
