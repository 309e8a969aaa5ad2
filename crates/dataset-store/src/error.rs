//! Storage Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from dataset persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input file absent; surfaced before any processing begins
    #[error("Missing input file: {0}")]
    MissingInput(PathBuf),

    /// Required column absent from an input header row
    #[error("Schema error, missing columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Non-numeric cell where a number was expected
    #[error("Invalid numeric value: {0:?}")]
    InvalidNumber(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
