//! Encoded Training Table

use crate::error::StoreError;
use std::fs;
use std::path::Path;
use tracing::info;

const NAME_COLUMN: &str = "Cn";
const TARGET_COLUMN: &str = "Ewltp (g/km)";

/// The encoded dataset produced by preprocessing: the commercial-name
/// identifier column, the CO2 target column, and named numeric feature
/// columns (including one-hot indicators).
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDataset {
    /// Feature column names, in column order
    pub feature_names: Vec<String>,
    /// Commercial name per row
    pub names: Vec<String>,
    /// Target value per row
    pub target: Vec<f64>,
    /// Feature values per row, aligned with `feature_names`
    pub features: Vec<Vec<f64>>,
}

impl ProcessedDataset {
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Write as CSV: identifier, target, then feature columns.
    pub fn write_csv(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        let mut header = vec![NAME_COLUMN.to_string(), TARGET_COLUMN.to_string()];
        header.extend(self.feature_names.iter().cloned());
        writer.write_record(&header)?;

        for i in 0..self.len() {
            let mut row = vec![self.names[i].clone(), self.target[i].to_string()];
            row.extend(self.features[i].iter().map(|v| v.to_string()));
            writer.write_record(&row)?;
        }
        writer.flush()?;
        info!("Wrote {} processed rows to {}", self.len(), path.display());
        Ok(())
    }

    /// Read back from CSV, header-driven: the identifier and target
    /// columns are located by name, everything else is a feature.
    pub fn read_csv(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::MissingInput(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let name_idx = headers.iter().position(|h| h == NAME_COLUMN);
        let target_idx = headers.iter().position(|h| h == TARGET_COLUMN);
        let (name_idx, target_idx) = match (name_idx, target_idx) {
            (Some(n), Some(t)) => (n, t),
            (n, t) => {
                let mut missing = Vec::new();
                if n.is_none() {
                    missing.push(NAME_COLUMN.to_string());
                }
                if t.is_none() {
                    missing.push(TARGET_COLUMN.to_string());
                }
                return Err(StoreError::Schema { missing });
            }
        };

        let feature_names: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_idx && *i != target_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut names = Vec::new();
        let mut target = Vec::new();
        let mut features = Vec::new();
        for row in reader.records() {
            let row = row?;
            names.push(row[name_idx].to_string());
            target.push(parse_cell(&row[target_idx])?);

            let mut values = Vec::with_capacity(feature_names.len());
            for (i, cell) in row.iter().enumerate() {
                if i != name_idx && i != target_idx {
                    values.push(parse_cell(cell)?);
                }
            }
            features.push(values);
        }

        info!("Read {} processed rows from {}", names.len(), path.display());
        Ok(Self {
            feature_names,
            names,
            target,
            features,
        })
    }
}

fn parse_cell(cell: &str) -> Result<f64, StoreError> {
    cell.parse()
        .map_err(|_| StoreError::InvalidNumber(cell.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> ProcessedDataset {
        ProcessedDataset {
            feature_names: vec![
                "M (kg)".into(),
                "Year".into(),
                "Ft_Essence".into(),
                "Ft_Diesel".into(),
            ],
            names: vec!["CLIO".into(), "GOLF".into()],
            target: vec![120.5, 131.0],
            features: vec![
                vec![1200.0, 2022.0, 1.0, 0.0],
                vec![1350.0, 2021.0, 0.0, 1.0],
            ],
        }
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("processed.csv");

        let dataset = sample();
        dataset.write_csv(&path).unwrap();
        let back = ProcessedDataset::read_csv(&path).unwrap();

        assert_eq!(back, dataset);
    }

    #[test]
    fn test_read_requires_identifier_and_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "A,B\n1,2\n").unwrap();

        let err = ProcessedDataset::read_csv(&path).unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
    }

    #[test]
    fn test_non_numeric_cell_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Cn,Ewltp (g/km),M (kg)\nCLIO,abc,1200\n").unwrap();

        let err = ProcessedDataset::read_csv(&path).unwrap_err();
        assert!(matches!(err, StoreError::InvalidNumber(_)));
    }
}
