//! Error types for shot ingestion and output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, translating or writing shot data.
#[derive(Debug, Error)]
pub enum ShotError {
    /// A data row has fewer cells than the active header set.
    #[error("insufficient columns: expected {expected}, found {found}")]
    InsufficientColumns { expected: usize, found: usize },

    /// A numeric cell could not be parsed. Coerced to `0.0` by the translator.
    #[error("unparsable number in '{field}': '{value}'")]
    UnparsableNumber { field: String, value: String },

    /// No shots survived scanning.
    #[error("no valid data found")]
    NoValidData,

    /// The requested launch monitor type is not registered.
    #[error("unsupported launch monitor type '{name}' (supported: {supported})")]
    UnsupportedProfile { name: String, supported: String },

    /// A write was attempted with zero shots.
    #[error("no data to write")]
    EmptyOutput,

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader hit corrupt input.
    #[error("malformed row: {0}")]
    MalformedRow(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ShotError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Result type for shot processing operations.
pub type Result<T> = std::result::Result<T, ShotError>;
