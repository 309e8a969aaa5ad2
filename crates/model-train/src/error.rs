//! Training Error Types

use thiserror::Error;

/// Errors during encoding, splitting, or training.
#[derive(Debug, Error)]
pub enum TrainError {
    /// No rows left to fit on
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Matrix dimensions do not line up
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Regression fit failure
    #[error("Linear regression failed: {0}")]
    Fit(#[from] linfa_linear::LinearError<f64>),

    /// Metric computation failure
    #[error("Metric computation failed: {0}")]
    Metrics(#[from] linfa::Error),
}
