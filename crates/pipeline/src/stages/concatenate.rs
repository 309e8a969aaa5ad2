//! Concatenate Stage
//!
//! Merges the per-year raw files into one dataset, in year order. All
//! inputs must exist before anything is read.

use crate::settings::Settings;
use anyhow::bail;
use dataset_store::{read_raw_records, write_raw_records};
use std::path::PathBuf;
use tracing::info;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    info!("Starting concatenation");

    let inputs: Vec<PathBuf> = settings.years.iter().map(|&y| settings.raw_file(y)).collect();
    let missing: Vec<&PathBuf> = inputs.iter().filter(|p| !p.exists()).collect();
    if !missing.is_empty() {
        let listed: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
        bail!("Missing input files: {}", listed.join(", "));
    }

    let mut merged = Vec::new();
    for path in &inputs {
        merged.extend(read_raw_records(path)?);
    }
    info!("Concatenated {} rows from {} files", merged.len(), inputs.len());

    write_raw_records(&settings.concat_file(), &merged)?;
    info!("Concatenated dataset at {}", settings.concat_file().display());
    Ok(())
}
