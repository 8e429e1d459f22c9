//! Ledger store implementations for Divvy.
//!
//! Two implementations of the core's `LedgerStore` contract:
//! - `MemoryStore` - process-local, for tests and embedding
//! - `JsonFileStore` - every group ledger in one JSON document on disk

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
