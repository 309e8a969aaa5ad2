//! Preprocess Stage
//!
//! Re-cleans the concatenated dataset with strict duplicate removal and
//! one-hot encodes the categorical columns into the training table.

use crate::settings::Settings;
use dataset_store::read_raw_records;
use model_train::encode_one_hot;
use record_cleaner::{DedupScope, RecordCleaner};
use tracing::info;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    info!("Starting preprocessing");
    let rows = read_raw_records(&settings.concat_file())?;
    info!("Preprocessing {} rows", rows.len());

    let cleaner = RecordCleaner::new(settings.clean_config(DedupScope::FullRow));
    let (records, report) = cleaner.clean(rows);
    info!("Cleaning kept {} rows", report.final_rows());

    let dataset = encode_one_hot(&records);
    dataset.write_csv(&settings.processed_file())?;
    info!("Processed dataset at {}", settings.processed_file().display());
    Ok(())
}
