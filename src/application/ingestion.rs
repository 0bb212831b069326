//! Media ingestion gateway.
//!
//! Shapes upload requests toward the durable media host and returns its
//! reference records. The host detects resource kinds and transforms
//! formats on its own; nothing is duplicated here. Validation is also
//! not performed here: callers run [`crate::domain::media::accepts`]
//! before constructing a candidate, which keeps the gateway agnostic to
//! media kind.
//!
//! No retries and no timeouts are applied at this layer; a stalled host
//! call stalls until the collaborator boundary gives up.

use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::media::UploadCandidate;
use crate::ports::{IngestedMedia, MediaStore, MediaStoreError};

/// Failure surfaced to callers of the ingestion gateway.
///
/// Carries the host's own message when it reported one, otherwise the
/// generic `"upload failed"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct IngestionError {
    message: String,
}

impl IngestionError {
    /// The message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<MediaStoreError> for IngestionError {
    fn from(err: MediaStoreError) -> Self {
        let message = match err {
            MediaStoreError::Upstream(message) => message,
            MediaStoreError::Transport(message) => message,
            MediaStoreError::EmptyResponse => "upload failed".to_string(),
        };
        Self { message }
    }
}

/// Gateway between upload callers and the durable media host.
pub struct MediaIngestionGateway {
    store: Arc<dyn MediaStore>,
    folder: String,
}

impl MediaIngestionGateway {
    /// Creates a gateway that uploads into the given logical folder.
    pub fn new(store: Arc<dyn MediaStore>, folder: impl Into<String>) -> Self {
        Self {
            store,
            folder: folder.into(),
        }
    }

    /// Ingests a single candidate, consuming it.
    pub async fn ingest_one(
        &self,
        candidate: UploadCandidate,
    ) -> Result<IngestedMedia, IngestionError> {
        let mime_type = candidate.declared_mime_type;
        let media = self
            .store
            .upload(candidate.bytes, &mime_type, &self.folder)
            .await
            .map_err(|err| {
                error!(error = %err, mime_type = %mime_type, "upload rejected by media host");
                IngestionError::from(err)
            })?;
        debug!(remote_id = %media.remote_id, "media ingested");
        Ok(media)
    }

    /// Ingests all candidates concurrently, all-or-nothing.
    ///
    /// Every candidate is dispatched to the host before any verdict is
    /// reached; if any single ingestion fails the whole batch fails and
    /// successful results are discarded. Callers needing partial
    /// success call [`MediaIngestionGateway::ingest_one`] per item.
    pub async fn ingest_many(
        &self,
        candidates: Vec<UploadCandidate>,
    ) -> Result<Vec<IngestedMedia>, IngestionError> {
        let uploads = candidates
            .into_iter()
            .map(|candidate| self.ingest_one(candidate));
        join_all(uploads).await.into_iter().collect()
    }

    /// Deletes a stored object by its host-assigned id.
    ///
    /// Idempotent by the host's contract; deleting an absent id is not
    /// distinguished here.
    pub async fn remove(&self, remote_id: &str) -> Result<(), IngestionError> {
        self.store.destroy(remote_id).await?;
        debug!(remote_id, "media removed");
        Ok(())
    }
}
