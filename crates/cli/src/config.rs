//! Shell configuration, read from the environment.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `STOCKBOOK_DATA_FILE` | path | `products.txt` |
//! | `STOCKBOOK_LOAD_POLICY` | `abort`, `skip` | `abort` |
//! | `STOCKBOOK_OUTPUT` | `text`, `json` | `text` |
//! | `STOCKBOOK_CURRENCY` | any text | `$` |
//! | `STOCKBOOK_LOG_FORMAT` | `compact`, `json` | `compact` |
//!
//! Unrecognised values fall back to the default with a warning.

use std::path::PathBuf;

use stockbook_infra::{DEFAULT_DATA_FILE, LoadPolicy};
use stockbook_observability::LogFormat;

pub const ENV_DATA_FILE: &str = "STOCKBOOK_DATA_FILE";
pub const ENV_LOAD_POLICY: &str = "STOCKBOOK_LOAD_POLICY";
pub const ENV_OUTPUT: &str = "STOCKBOOK_OUTPUT";
pub const ENV_CURRENCY: &str = "STOCKBOOK_CURRENCY";
pub const ENV_LOG_FORMAT: &str = "STOCKBOOK_LOG_FORMAT";

/// How listed entries are printed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// `wh | Category | code | name | date | N days | qty | price` rows.
    #[default]
    Text,
    /// One JSON object per entry.
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "table" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub data_file: PathBuf,
    pub load_policy: LoadPolicy,
    pub output: OutputFormat,
    pub currency: String,
    pub log_format: LogFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            load_policy: LoadPolicy::default(),
            output: OutputFormat::default(),
            currency: "$".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_file = lookup(ENV_DATA_FILE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        Self {
            data_file,
            load_policy: parse_or_default(
                &lookup,
                ENV_LOAD_POLICY,
                LoadPolicy::from_name,
                defaults.load_policy,
            ),
            output: parse_or_default(&lookup, ENV_OUTPUT, OutputFormat::from_name, defaults.output),
            currency: lookup(ENV_CURRENCY).unwrap_or(defaults.currency),
            log_format: parse_or_default(
                &lookup,
                ENV_LOG_FORMAT,
                LogFormat::from_name,
                defaults.log_format,
            ),
        }
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, parse: fn(&str) -> Option<T>, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: core::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            tracing::warn!(
                variable = key,
                value = %raw,
                fallback = ?default,
                "unrecognised setting; using default"
            );
            default
        }),
    }
}
