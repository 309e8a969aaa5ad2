//! Split Stage
//!
//! Seeded 80/20 partition of the processed dataset into the four
//! training artifacts.

use crate::settings::Settings;
use dataset_store::{write_matrix, write_target, ProcessedDataset};
use emission_record::NumericColumn;
use model_train::split_dataset;
use tracing::info;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    info!("Starting split");
    let dataset = ProcessedDataset::read_csv(&settings.processed_file())?;
    info!(
        "Loaded {} rows, {} feature columns",
        dataset.len(),
        dataset.feature_names.len()
    );

    let split = split_dataset(&dataset, &settings.split);

    write_matrix(&settings.x_train_file(), &split.feature_names, &split.x_train)?;
    write_matrix(&settings.x_test_file(), &split.feature_names, &split.x_test)?;
    let target = NumericColumn::Co2.name();
    write_target(&settings.y_train_file(), target, &split.y_train)?;
    write_target(&settings.y_test_file(), target, &split.y_test)?;

    info!(
        "Split artifacts written under {}",
        settings.paths.processed_dir.display()
    );
    Ok(())
}
