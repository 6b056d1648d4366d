use std::sync::RwLock;

use stockbook_inventory::{InventoryItem, LineCodec};

use super::r#trait::{ItemStore, LoadOutcome, LoadPolicy, StoreError};

/// In-memory append-only store.
///
/// Keeps the encoded lines rather than the entries, so loads go through the
/// same codec path as the file store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    lines: RwLock<Vec<String>>,
    policy: LoadPolicy,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw stored lines (which need not be valid).
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: RwLock::new(lines.into_iter().map(Into::into).collect()),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Snapshot of the raw stored lines.
    pub fn lines(&self) -> Result<Vec<String>, StoreError> {
        let lines = self.lines.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(lines.clone())
    }
}

impl ItemStore for InMemoryItemStore {
    fn append(&self, items: &[InventoryItem]) -> Result<usize, StoreError> {
        let mut lines = self.lines.write().map_err(|_| StoreError::LockPoisoned)?;
        lines.extend(items.iter().map(|item| LineCodec.encode(item)));
        Ok(items.len())
    }

    fn load_all(&self) -> Result<LoadOutcome, StoreError> {
        let lines = self.lines.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(LoadOutcome::from_lines(
            lines.iter().cloned().map(Ok),
            self.policy,
        ))
    }
}
