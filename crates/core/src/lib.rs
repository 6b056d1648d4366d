//! `stockbook-core` — shared building blocks for the stock record crates.
//!
//! This crate contains **pure** primitives (no IO, no storage concerns).

pub mod error;

pub use error::{DecodeError, DecodeResult};
