//! Split Artifact CSV I/O
//!
//! Plain numeric matrices (X_train/X_test) and single-column targets
//! (y_train/y_test).

use crate::error::StoreError;
use std::fs;
use std::path::Path;

/// Write a numeric matrix with named columns.
pub fn write_matrix(path: &Path, headers: &[String], rows: &[Vec<f64>]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a numeric matrix, returning `(headers, rows)`.
pub fn read_matrix(path: &Path) -> Result<(Vec<String>, Vec<Vec<f64>>), StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        rows.push(
            row.iter()
                .map(|cell| {
                    cell.parse()
                        .map_err(|_| StoreError::InvalidNumber(cell.to_string()))
                })
                .collect::<Result<Vec<f64>, _>>()?,
        );
    }
    Ok((headers, rows))
}

/// Write a single-column target vector.
pub fn write_target(path: &Path, header: &str, values: &[f64]) -> Result<(), StoreError> {
    let rows: Vec<Vec<f64>> = values.iter().map(|v| vec![*v]).collect();
    write_matrix(path, &[header.to_string()], &rows)
}

/// Read a single-column target vector.
pub fn read_target(path: &Path) -> Result<Vec<f64>, StoreError> {
    let (_, rows) = read_matrix(path)?;
    Ok(rows.into_iter().filter_map(|row| row.first().copied()).collect())
}
