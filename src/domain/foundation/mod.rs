//! Foundation types shared across domain modules.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::UserId;
