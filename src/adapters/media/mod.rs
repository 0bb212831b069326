//! Media store adapters: HTTP and mock.

mod http;
mod mock;

pub use http::{HttpMediaStore, MediaServiceConfig};
pub use mock::{MockMediaStore, ReceivedUpload};
