//! Domain layer - pure types and logic with no I/O dependencies.

pub mod entitlement;
pub mod foundation;
pub mod media;
pub mod session;
