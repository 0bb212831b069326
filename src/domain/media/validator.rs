//! Upload acceptance predicate.
//!
//! Pure, transport-independent rules for what may be uploaded: a fixed
//! MIME allow-list and a size ceiling per media kind. Rejection is a
//! plain `false`; callers decide how to surface it.

use serde::{Deserialize, Serialize};

use super::UploadCandidate;

/// Size ceiling for image uploads: 10 MiB.
pub const IMAGE_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Size ceiling for video uploads: 100 MiB.
pub const VIDEO_MAX_BYTES: u64 = 100 * 1024 * 1024;

const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];
const VIDEO_MIME_TYPES: &[&str] = &["video/mp4", "video/mpeg", "video/quicktime"];

/// The kind of media being uploaded, selecting the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Returns the fixed MIME allow-list for this kind.
    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_MIME_TYPES,
            MediaKind::Video => VIDEO_MIME_TYPES,
        }
    }

    /// Returns the inclusive size ceiling in bytes for this kind.
    pub fn max_bytes(&self) -> u64 {
        match self {
            MediaKind::Image => IMAGE_MAX_BYTES,
            MediaKind::Video => VIDEO_MAX_BYTES,
        }
    }
}

/// Returns true if the candidate may be uploaded as the given kind.
///
/// Both checks must hold: the declared MIME type is on the kind's
/// allow-list AND the declared size is at or under the ceiling (a
/// candidate exactly at the ceiling is accepted).
pub fn accepts(candidate: &UploadCandidate, kind: MediaKind) -> bool {
    let mime_ok = kind
        .allowed_mime_types()
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&candidate.declared_mime_type));
    mime_ok && candidate.declared_size <= kind.max_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime: &str, size: u64) -> UploadCandidate {
        UploadCandidate::with_declared_size(Vec::new(), mime, size)
    }

    #[test]
    fn accepts_allowed_image_types_under_ceiling() {
        for mime in ["image/jpeg", "image/jpg", "image/png", "image/webp"] {
            assert!(accepts(&candidate(mime, 1024), MediaKind::Image), "{mime}");
        }
    }

    #[test]
    fn accepts_allowed_video_types_under_ceiling() {
        for mime in ["video/mp4", "video/mpeg", "video/quicktime"] {
            assert!(accepts(&candidate(mime, 1024), MediaKind::Video), "{mime}");
        }
    }

    #[test]
    fn rejects_disallowed_mime_type() {
        assert!(!accepts(&candidate("image/gif", 1024), MediaKind::Image));
        assert!(!accepts(&candidate("video/webm", 1024), MediaKind::Video));
        assert!(!accepts(&candidate("application/pdf", 1024), MediaKind::Image));
    }

    #[test]
    fn rejects_kind_mismatch() {
        assert!(!accepts(&candidate("video/mp4", 1024), MediaKind::Image));
        assert!(!accepts(&candidate("image/png", 1024), MediaKind::Video));
    }

    #[test]
    fn image_size_exactly_at_ceiling_is_accepted() {
        assert!(accepts(
            &candidate("image/png", IMAGE_MAX_BYTES),
            MediaKind::Image
        ));
    }

    #[test]
    fn image_size_one_byte_over_ceiling_is_rejected() {
        assert!(!accepts(
            &candidate("image/png", IMAGE_MAX_BYTES + 1),
            MediaKind::Image
        ));
    }

    #[test]
    fn video_size_boundary() {
        assert!(accepts(
            &candidate("video/mp4", VIDEO_MAX_BYTES),
            MediaKind::Video
        ));
        assert!(!accepts(
            &candidate("video/mp4", VIDEO_MAX_BYTES + 1),
            MediaKind::Video
        ));
    }

    #[test]
    fn mime_match_is_case_insensitive() {
        assert!(accepts(&candidate("Image/JPEG", 1024), MediaKind::Image));
    }

    #[test]
    fn ceilings_match_documented_byte_counts() {
        assert_eq!(IMAGE_MAX_BYTES, 10_485_760);
        assert_eq!(VIDEO_MAX_BYTES, 104_857_600);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Acceptance is exactly the conjunction of the two checks,
            // for any declared mime/size combination.
            #[test]
            fn acceptance_is_conjunctive(mime in "[a-z]{1,10}/[a-z0-9.-]{1,15}", size in 0u64..u64::MAX) {
                for kind in [MediaKind::Image, MediaKind::Video] {
                    let c = candidate(&mime, size);
                    let mime_ok = kind
                        .allowed_mime_types()
                        .iter()
                        .any(|a| a.eq_ignore_ascii_case(&mime));
                    let size_ok = size <= kind.max_bytes();
                    prop_assert_eq!(accepts(&c, kind), mime_ok && size_ok);
                }
            }
        }
    }
}
