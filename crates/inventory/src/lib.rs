//! Inventory record module.
//!
//! This crate contains the stock entry model, its single-line text codec and
//! the attribute search over loaded entries, implemented purely as
//! deterministic logic (no IO, no storage).

pub mod codec;
pub mod item;
pub mod query;

pub use codec::{LineCodec, decode, encode};
pub use item::{Category, InventoryItem};
pub use query::{SearchCriteria, filter};
