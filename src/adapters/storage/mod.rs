//! State store adapters: file-backed and in-memory.

mod file;
mod in_memory;

pub use file::FileStateStore;
pub use in_memory::InMemoryStateStore;
