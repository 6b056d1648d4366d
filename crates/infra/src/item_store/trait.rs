use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use stockbook_core::DecodeError;
use stockbook_inventory::{InventoryItem, LineCodec};

/// Store operation error.
///
/// These are **infrastructure errors** (file access, corrupt lines) as opposed
/// to user input errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {op} {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number} is malformed ({source}): {line:?}")]
    Decode {
        line_number: usize,
        line: String,
        #[source]
        source: DecodeError,
    },

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, op: &'static str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            op,
            source,
        }
    }

    /// 1-based line number of the offending line, when there is one.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            StoreError::Read { line_number, .. } | StoreError::Decode { line_number, .. } => {
                Some(*line_number)
            }
            StoreError::Io { .. } | StoreError::LockPoisoned => None,
        }
    }
}

/// What `load_all` does when a stored line cannot be decoded.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Stop at the first bad line; entries before it are kept, the rest of the
    /// file is ignored.
    #[default]
    Abort,
    /// Record the bad line and keep reading.
    SkipInvalid,
}

impl LoadPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "abort" => Some(LoadPolicy::Abort),
            "skip" | "skip-invalid" => Some(LoadPolicy::SkipInvalid),
            _ => None,
        }
    }
}

/// Result of a full load: the entries that decoded, plus every line-level
/// failure met on the way.
///
/// Under [`LoadPolicy::Abort`] `errors` holds at most one entry.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub items: Vec<InventoryItem>,
    pub errors: Vec<StoreError>,
}

impl LoadOutcome {
    /// Decode a sequence of stored lines.
    ///
    /// Line numbers are 1-based and count empty lines, which are skipped.
    /// A read failure always ends the load, whatever the policy.
    pub fn from_lines<I>(lines: I, policy: LoadPolicy) -> Self
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut outcome = LoadOutcome::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    outcome.errors.push(StoreError::Read {
                        line_number,
                        source,
                    });
                    break;
                }
            };

            if line.is_empty() {
                continue;
            }

            match LineCodec.decode(&line) {
                Ok(item) => outcome.items.push(item),
                Err(source) => {
                    tracing::warn!(line_number, error = %source, "malformed stored line");
                    outcome.errors.push(StoreError::Decode {
                        line_number,
                        line,
                        source,
                    });
                    if policy == LoadPolicy::Abort {
                        break;
                    }
                }
            }
        }

        outcome
    }

    /// True when every stored line decoded.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a strict result: the first error wins.
    pub fn into_result(self) -> Result<Vec<InventoryItem>, StoreError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}

/// Append-only stock entry store.
///
/// ## Append Semantics
///
/// `append()` writes entries in input order after everything already stored.
/// Existing content is never rewritten. There is no rollback: entries written
/// before a failure stay written.
///
/// ## Load Semantics
///
/// `load_all()`:
/// - Returns every stored entry in storage order
/// - Returns an empty outcome if nothing was ever stored
/// - Reports malformed lines in the outcome, per the store's [`LoadPolicy`]
/// - Fails outright only when the backing storage cannot be opened
pub trait ItemStore {
    /// Append entries; returns how many were written.
    fn append(&self, items: &[InventoryItem]) -> Result<usize, StoreError>;

    /// Load every stored entry.
    fn load_all(&self) -> Result<LoadOutcome, StoreError>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn append(&self, items: &[InventoryItem]) -> Result<usize, StoreError> {
        (**self).append(items)
    }

    fn load_all(&self) -> Result<LoadOutcome, StoreError> {
        (**self).load_all()
    }
}

impl<S> ItemStore for &S
where
    S: ItemStore + ?Sized,
{
    fn append(&self, items: &[InventoryItem]) -> Result<usize, StoreError> {
        (**self).append(items)
    }

    fn load_all(&self) -> Result<LoadOutcome, StoreError> {
        (**self).load_all()
    }
}
