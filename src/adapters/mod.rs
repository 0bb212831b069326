//! Adapters - concrete implementations of the collaborator ports.

pub mod identity;
pub mod media;
pub mod storage;
