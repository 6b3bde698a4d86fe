//! Storage module
//!
//! Provides key-value record storage for persisted JSON blobs.

pub mod record_store;

pub use record_store::RecordStore;
