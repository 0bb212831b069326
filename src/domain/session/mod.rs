//! Session domain: user identity, roles, and the session value object.

mod session;
mod user;

pub use session::Session;
pub use user::{UserIdentity, UserRole};
