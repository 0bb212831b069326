//! Upload candidate - a media file as declared by the client.

/// A media file submitted for upload, before any validation or ingestion.
///
/// Transient by design: a candidate lives only for the duration of one
/// validation/ingestion call and is never persisted as-is. The declared
/// MIME type and size are client claims; the acceptance predicate in
/// [`super::accepts`] judges them as declared.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    /// Raw file content.
    pub bytes: Vec<u8>,

    /// MIME type as declared by the client, e.g. `image/jpeg`.
    pub declared_mime_type: String,

    /// Size in bytes as declared by the client.
    pub declared_size: u64,
}

impl UploadCandidate {
    /// Creates a candidate, taking the declared size from the byte buffer.
    pub fn new(bytes: Vec<u8>, declared_mime_type: impl Into<String>) -> Self {
        let declared_size = bytes.len() as u64;
        Self {
            bytes,
            declared_mime_type: declared_mime_type.into(),
            declared_size,
        }
    }

    /// Creates a candidate with an explicit declared size.
    ///
    /// Browsers report file size separately from the content they stream;
    /// the two can disagree, and validation judges the declaration.
    pub fn with_declared_size(
        bytes: Vec<u8>,
        declared_mime_type: impl Into<String>,
        declared_size: u64,
    ) -> Self {
        Self {
            bytes,
            declared_mime_type: declared_mime_type.into(),
            declared_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_takes_size_from_buffer() {
        let candidate = UploadCandidate::new(vec![0u8; 42], "image/png");
        assert_eq!(candidate.declared_size, 42);
        assert_eq!(candidate.declared_mime_type, "image/png");
    }

    #[test]
    fn explicit_size_overrides_buffer_length() {
        let candidate = UploadCandidate::with_declared_size(vec![0u8; 10], "video/mp4", 999);
        assert_eq!(candidate.declared_size, 999);
        assert_eq!(candidate.bytes.len(), 10);
    }
}
