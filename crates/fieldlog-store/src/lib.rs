//! Record store implementations for fieldlog.
//!
//! Adapters behind the `fieldlog_core::ports::RecordStore` port: a
//! file-backed store for real data and an in-memory store for tests. Both
//! hold the observation collection as a single JSON blob under one logical
//! key, so swapping backends never changes collection semantics.

#![deny(unsafe_code)]

pub mod factory;
mod file;
mod memory;

// Re-export store types for convenient access
pub use factory::StoreFactory;
pub use file::FileRecordStore;
pub use memory::MemoryRecordStore;
