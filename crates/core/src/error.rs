//! Record-level error model.

use thiserror::Error;

/// Result type used by record decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A stored line (or one of its fields) could not be turned back into a record.
///
/// Keep this focused on deterministic format failures. IO concerns belong to
/// the storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line did not split into the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// An integer field was not parseable.
    #[error("field `{field}` is not a valid integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// A decimal field was not parseable.
    #[error("field `{field}` is not a valid decimal: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    /// The category name is not one of the known variants.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// The date is not an ISO 8601 calendar date (`YYYY-MM-DD`).
    #[error("invalid date (expected YYYY-MM-DD): {0:?}")]
    InvalidDate(String),
}

impl DecodeError {
    pub fn field_count(expected: usize, found: usize) -> Self {
        Self::FieldCount { expected, found }
    }

    pub fn invalid_integer(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_decimal(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDecimal {
            field,
            value: value.into(),
        }
    }

    pub fn unknown_category(value: impl Into<String>) -> Self {
        Self::UnknownCategory(value.into())
    }

    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate(value.into())
    }
}
