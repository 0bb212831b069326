//! Identity provider adapters: HTTP and mock.

mod http;
mod mock;

pub use http::{HttpIdentityProvider, IdentityServiceConfig};
pub use mock::MockIdentityProvider;
