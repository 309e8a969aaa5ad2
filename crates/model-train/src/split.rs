//! Seeded Train/Test Split

use dataset_store::ProcessedDataset;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Split configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of rows held out for testing
    pub test_fraction: f64,
    /// RNG seed; the split is reproducible for a given seed
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// The four split artifacts. Features exclude the target and the
/// commercial-name identifier.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub feature_names: Vec<String>,
    pub x_train: Vec<Vec<f64>>,
    pub x_test: Vec<Vec<f64>>,
    pub y_train: Vec<f64>,
    pub y_test: Vec<f64>,
}

/// Shuffle row indices with a seeded RNG and partition.
pub fn split_dataset(dataset: &ProcessedDataset, config: &SplitConfig) -> TrainTestSplit {
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);

    let n_test = (dataset.len() as f64 * config.test_fraction).round() as usize;
    let (test_idx, train_idx) = indices.split_at(n_test);

    let split = TrainTestSplit {
        feature_names: dataset.feature_names.clone(),
        x_train: train_idx.iter().map(|&i| dataset.features[i].clone()).collect(),
        x_test: test_idx.iter().map(|&i| dataset.features[i].clone()).collect(),
        y_train: train_idx.iter().map(|&i| dataset.target[i]).collect(),
        y_test: test_idx.iter().map(|&i| dataset.target[i]).collect(),
    };
    info!(
        "Split {} rows: {} train, {} test",
        dataset.len(),
        split.x_train.len(),
        split.x_test.len()
    );
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> ProcessedDataset {
        ProcessedDataset {
            feature_names: vec!["M (kg)".into()],
            names: (0..n).map(|i| format!("m{i}")).collect(),
            target: (0..n).map(|i| i as f64).collect(),
            features: (0..n).map(|i| vec![1000.0 + i as f64]).collect(),
        }
    }

    #[test]
    fn test_split_sizes() {
        let split = split_dataset(&dataset(100), &SplitConfig::default());
        assert_eq!(split.x_test.len(), 20);
        assert_eq!(split.x_train.len(), 80);
        assert_eq!(split.y_test.len(), 20);
        assert_eq!(split.y_train.len(), 80);
    }

    #[test]
    fn test_split_is_reproducible() {
        let data = dataset(50);
        let config = SplitConfig::default();
        let a = split_dataset(&data, &config);
        let b = split_dataset(&data, &config);
        assert_eq!(a.y_train, b.y_train);
        assert_eq!(a.y_test, b.y_test);
    }

    #[test]
    fn test_seed_changes_partition() {
        let data = dataset(50);
        let a = split_dataset(&data, &SplitConfig::default());
        let b = split_dataset(&data, &SplitConfig { seed: 7, ..SplitConfig::default() });
        assert_ne!(a.y_test, b.y_test);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let data = dataset(30);
        let split = split_dataset(&data, &SplitConfig::default());

        let mut all: Vec<f64> = split
            .y_train
            .iter()
            .chain(split.y_test.iter())
            .copied()
            .collect();
        all.sort_by(|a, b| a.total_cmp(b));
        let expected: Vec<f64> = (0..30).map(|i| i as f64).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_rows_stay_aligned_with_targets() {
        let data = dataset(40);
        let split = split_dataset(&data, &SplitConfig::default());
        for (x, y) in split.x_train.iter().zip(&split.y_train) {
            assert_eq!(x[0], 1000.0 + y);
        }
    }
}
