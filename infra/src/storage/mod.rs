//! Durable client-side key-value storage.

mod file_store;
mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;
