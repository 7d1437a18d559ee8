//! Error types for cleaning operations.

use polars::prelude::{DataType, PolarsError};

/// Result type for cleaning operations
pub type CleaningResult<T> = Result<T, CleaningError>;

/// Error type for cleaning operations
#[derive(Debug, thiserror::Error)]
pub enum CleaningError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Column '{column}' has incorrect type: expected {expected}, got {found:?}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: DataType,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
