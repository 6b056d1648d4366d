use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use stockbook_inventory::{InventoryItem, LineCodec};

use super::r#trait::{ItemStore, LoadOutcome, LoadPolicy, StoreError};

/// Data file used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "products.txt";

/// Text file store: one encoded entry per line, grown by append only.
///
/// No locking is performed; a single process is assumed to own the file for
/// the duration of a run.
#[derive(Debug, Clone)]
pub struct FileItemStore {
    path: PathBuf,
    policy: LoadPolicy,
}

impl FileItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }
}

impl Default for FileItemStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl ItemStore for FileItemStore {
    fn append(&self, items: &[InventoryItem]) -> Result<usize, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, "open", e))?;

        // The handle is closed when `writer` drops, on every return path.
        let mut writer = BufWriter::new(file);
        for item in items {
            writeln!(writer, "{}", LineCodec.encode(item))
                .map_err(|e| StoreError::io(&self.path, "write", e))?;
        }
        writer
            .flush()
            .map_err(|e| StoreError::io(&self.path, "flush", e))?;

        tracing::debug!(path = %self.path.display(), count = items.len(), "appended stock entries");
        Ok(items.len())
    }

    fn load_all(&self) -> Result<LoadOutcome, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "data file absent; nothing stored yet"
                );
                return Ok(LoadOutcome::default());
            }
            Err(e) => return Err(StoreError::io(&self.path, "open", e)),
        };

        let outcome = LoadOutcome::from_lines(BufReader::new(file).lines(), self.policy);

        tracing::debug!(
            path = %self.path.display(),
            loaded = outcome.items.len(),
            failed = outcome.errors.len(),
            "loaded stock entries"
        );
        Ok(outcome)
    }
}
