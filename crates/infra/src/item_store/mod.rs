//! Append-only stock entry store boundary.
//!
//! This module defines the persistence abstraction for stock entries and its
//! two implementations: a line-per-entry text file and an in-memory store.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::{DEFAULT_DATA_FILE, FileItemStore};
pub use in_memory::InMemoryItemStore;
pub use r#trait::{ItemStore, LoadOutcome, LoadPolicy, StoreError};
