//! Record Set CSV I/O

use crate::error::StoreError;
use emission_record::{RawRecord, Record, REQUIRED_COLUMNS};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a raw record set from CSV.
///
/// The header row is validated against the canonical column set before
/// any row is parsed; a missing column aborts with a schema error and no
/// partial output.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawRecord>, StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::Schema { missing });
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Write a cleaned record set to CSV in the canonical column order,
/// creating parent directories as needed.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Write raw rows back out unchanged (missing cells stay empty). Used
/// when a stage reshapes files without cleaning, e.g. concatenation.
pub fn write_raw_records(path: &Path, rows: &[RawRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} raw rows to {}", rows.len(), path.display());
    Ok(())
}
