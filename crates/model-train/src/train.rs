//! Least-Squares Regression Training

use crate::error::TrainError;
use crate::split::TrainTestSplit;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Trained regression model, serializable for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Feature column names, aligned with `coefficients`
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Evaluation metrics on the held-out set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scores {
    pub r2: f64,
    pub mse: f64,
}

/// Evaluation output: metrics plus per-row predictions.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub scores: Scores,
    /// (y_true, y_pred) per held-out row
    pub predictions: Vec<(f64, f64)>,
}

/// Fit a least-squares regression on the training partition and
/// evaluate on the held-out partition.
pub fn train_model(split: &TrainTestSplit) -> Result<(TrainedModel, Evaluation), TrainError> {
    if split.x_train.is_empty() || split.x_test.is_empty() {
        return Err(TrainError::EmptyTrainingSet);
    }

    let n_features = split.feature_names.len();
    let x_train = to_matrix(&split.x_train, n_features)?;
    let x_test = to_matrix(&split.x_test, n_features)?;
    let y_train = Array1::from_vec(split.y_train.clone());
    let y_test = Array1::from_vec(split.y_test.clone());

    let train_set = Dataset::new(x_train, y_train);
    let test_set = Dataset::new(x_test, y_test);

    info!(
        "Fitting least-squares regression on {} rows, {} features",
        train_set.nsamples(),
        n_features
    );
    let fitted = LinearRegression::new().fit(&train_set)?;

    let predicted = fitted.predict(&test_set);
    let scores = Scores {
        r2: predicted.r2(&test_set)?,
        mse: predicted.mean_squared_error(&test_set)?,
    };
    info!("Evaluation: R2 = {:.4}, MSE = {:.4}", scores.r2, scores.mse);

    let model = TrainedModel {
        feature_names: split.feature_names.clone(),
        coefficients: fitted.params().to_vec(),
        intercept: fitted.intercept(),
    };
    let predictions = split
        .y_test
        .iter()
        .zip(predicted.iter())
        .map(|(truth, pred)| (*truth, *pred))
        .collect();

    Ok((
        model,
        Evaluation {
            scores,
            predictions,
        },
    ))
}

fn to_matrix(rows: &[Vec<f64>], n_features: usize) -> Result<Array2<f64>, TrainError> {
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(Array2::from_shape_vec((rows.len(), n_features), flat)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// y = 2 * x0 + 3 * x1 + 5, noise-free.
    fn linear_split() -> TrainTestSplit {
        let f = |a: f64, b: f64| 2.0 * a + 3.0 * b + 5.0;
        let x_train: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![i as f64, (i % 4) as f64])
            .collect();
        let y_train = x_train.iter().map(|r| f(r[0], r[1])).collect();
        let x_test: Vec<Vec<f64>> = (20..25)
            .map(|i| vec![i as f64, (i % 3) as f64])
            .collect();
        let y_test = x_test.iter().map(|r| f(r[0], r[1])).collect();

        TrainTestSplit {
            feature_names: vec!["a".into(), "b".into()],
            x_train,
            x_test,
            y_train,
            y_test,
        }
    }

    #[test]
    fn test_recovers_exact_linear_relation() {
        let (model, evaluation) = train_model(&linear_split()).unwrap();

        assert!((model.coefficients[0] - 2.0).abs() < 1e-6);
        assert!((model.coefficients[1] - 3.0).abs() < 1e-6);
        assert!((model.intercept - 5.0).abs() < 1e-6);
        assert!(evaluation.scores.r2 > 0.999);
        assert!(evaluation.scores.mse < 1e-6);
    }

    #[test]
    fn test_predictions_pair_truth_with_estimate() {
        let split = linear_split();
        let (_, evaluation) = train_model(&split).unwrap();

        assert_eq!(evaluation.predictions.len(), split.y_test.len());
        for ((truth, pred), expected) in evaluation.predictions.iter().zip(&split.y_test) {
            assert_eq!(truth, expected);
            assert!((truth - pred).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_split_rejected() {
        let split = TrainTestSplit {
            feature_names: vec!["a".into()],
            x_train: vec![],
            x_test: vec![],
            y_train: vec![],
            y_test: vec![],
        };
        assert!(matches!(
            train_model(&split),
            Err(TrainError::EmptyTrainingSet)
        ));
    }
}
