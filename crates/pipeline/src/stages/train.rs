//! Train Stage
//!
//! Fits the regression on the split artifacts, evaluates on the held-out
//! set, and persists the model, scores, and predictions.

use crate::settings::Settings;
use dataset_store::{read_matrix, read_target, write_json, write_matrix};
use model_train::{train_model, TrainTestSplit};
use tracing::info;

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    info!("Starting training");

    let (feature_names, x_train) = read_matrix(&settings.x_train_file())?;
    let (_, x_test) = read_matrix(&settings.x_test_file())?;
    let y_train = read_target(&settings.y_train_file())?;
    let y_test = read_target(&settings.y_test_file())?;
    info!(
        "Loaded split: {} train rows, {} test rows",
        x_train.len(),
        x_test.len()
    );

    let split = TrainTestSplit {
        feature_names,
        x_train,
        x_test,
        y_train,
        y_test,
    };
    let (model, evaluation) = train_model(&split)?;

    write_json(&settings.model_file(), &model)?;
    write_json(&settings.scores_file(), &evaluation.scores)?;

    let prediction_rows: Vec<Vec<f64>> = evaluation
        .predictions
        .iter()
        .map(|(truth, pred)| vec![*truth, *pred])
        .collect();
    write_matrix(
        &settings.paths.predictions_file,
        &["y_true".to_string(), "y_pred".to_string()],
        &prediction_rows,
    )?;

    info!(
        "Training finished: R2 = {:.4}, MSE = {:.4}",
        evaluation.scores.r2, evaluation.scores.mse
    );
    Ok(())
}
