//! Ports - contracts for external collaborators.
//!
//! The core consumes these interfaces and never implements the
//! collaborators themselves: the identity service, the durable media
//! host, and the key/value persistence substrate.

mod identity_provider;
mod media_store;
mod state_store;

pub use identity_provider::{Credentials, IdentityError, IdentityProvider, IdentitySession};
pub use media_store::{IngestedMedia, MediaStore, MediaStoreError, ResourceKind};
pub use state_store::{StateStore, StateStoreError};
