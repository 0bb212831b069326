//! Media upload domain: candidates, kinds, and the acceptance predicate.

mod candidate;
mod validator;

pub use candidate::UploadCandidate;
pub use validator::{accepts, MediaKind, IMAGE_MAX_BYTES, VIDEO_MAX_BYTES};
