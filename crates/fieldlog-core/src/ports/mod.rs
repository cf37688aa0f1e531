//! Port definitions (trait abstractions) for the storage boundary.
//!
//! Ports keep the core independent of any particular backend: the
//! repository and view layers depend on these traits, adapters in
//! `fieldlog-store` implement them.

mod record_store;

pub use record_store::{RecordStore, StoreError};

#[cfg(test)]
pub use record_store::MockRecordStore;
