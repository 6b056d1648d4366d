//! Infrastructure layer: persistence of stock entries.

pub mod item_store;

pub use item_store::{
    DEFAULT_DATA_FILE, FileItemStore, InMemoryItemStore, ItemStore, LoadOutcome, LoadPolicy,
    StoreError,
};
