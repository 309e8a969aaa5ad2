//! JSON Pipeline Artifacts

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Metadata written next to the per-year raw files after an import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportMetadata {
    /// Import run identifier
    pub run_id: Uuid,
    /// When the fetch completed
    pub fetched_at: DateTime<Utc>,
    /// Year -> raw file path
    pub files: BTreeMap<i32, String>,
    /// Rows written per year
    pub rows: BTreeMap<i32, usize>,
}

/// Serialize any artifact to pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a JSON artifact back.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingInput(path.to_path_buf()));
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}
