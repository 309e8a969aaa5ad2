//! Pipeline Settings
//!
//! Layered configuration: built-in defaults, an optional `pipeline.toml`
//! next to the working directory, then `EMISSION_*` environment
//! overrides (e.g. `EMISSION_SPLIT__SEED=7`).

use config::{Config, ConfigError, Environment, File};
use emission_source::SourceConfig;
use model_train::SplitConfig;
use record_cleaner::{CleanConfig, DedupScope};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output locations for pipeline artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Per-year raw files and import metadata
    pub raw_dir: PathBuf,
    /// Concatenated, processed, and split files
    pub processed_dir: PathBuf,
    /// Trained model artifact
    pub models_dir: PathBuf,
    /// Evaluation scores
    pub metrics_dir: PathBuf,
    /// Held-out predictions
    pub predictions_file: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            raw_dir: "data/raw".into(),
            processed_dir: "data/processed".into(),
            models_dir: "models".into(),
            metrics_dir: "metrics".into(),
            predictions_file: "data/predictions.csv".into(),
        }
    }
}

/// Cleaning parameters shared by the import and preprocess stages; the
/// dedup scope is fixed per stage, not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningSettings {
    pub min_brand_support: usize,
    pub iqr_multiplier: f64,
}

impl Default for CleaningSettings {
    fn default() -> Self {
        let defaults = CleanConfig::default();
        Self {
            min_brand_support: defaults.min_brand_support,
            iqr_multiplier: defaults.iqr_multiplier,
        }
    }
}

/// Pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub source: SourceConfig,
    /// Model years partitioning the import output
    pub years: Vec<i32>,
    pub cleaning: CleaningSettings,
    pub split: SplitConfig,
}

impl Settings {
    /// Load settings: defaults, then `pipeline.toml`, then environment.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Config::try_from(&Settings::default())?;
        Config::builder()
            .add_source(defaults)
            .add_source(File::with_name("pipeline").required(false))
            .add_source(Environment::with_prefix("EMISSION").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Cleaning config for one stage, with that stage's dedup scope.
    pub fn clean_config(&self, dedup_scope: DedupScope) -> CleanConfig {
        CleanConfig {
            dedup_scope,
            min_brand_support: self.cleaning.min_brand_support,
            iqr_multiplier: self.cleaning.iqr_multiplier,
        }
    }

    pub fn raw_file(&self, year: i32) -> PathBuf {
        self.paths.raw_dir.join(format!("DF_{year}_Raw.csv"))
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.paths.raw_dir.join("metadata.json")
    }

    pub fn concat_file(&self) -> PathBuf {
        self.paths
            .processed_dir
            .join(format!("DF_{}_Concat_Raw.csv", self.year_span()))
    }

    pub fn processed_file(&self) -> PathBuf {
        self.paths
            .processed_dir
            .join(format!("DF_{}_Processed.csv", self.year_span()))
    }

    pub fn x_train_file(&self) -> PathBuf {
        self.paths.processed_dir.join("X_train.csv")
    }

    pub fn x_test_file(&self) -> PathBuf {
        self.paths.processed_dir.join("X_test.csv")
    }

    pub fn y_train_file(&self) -> PathBuf {
        self.paths.processed_dir.join("y_train.csv")
    }

    pub fn y_test_file(&self) -> PathBuf {
        self.paths.processed_dir.join("y_test.csv")
    }

    pub fn model_file(&self) -> PathBuf {
        self.paths.models_dir.join("model.json")
    }

    pub fn scores_file(&self) -> PathBuf {
        self.paths.metrics_dir.join("scores.json")
    }

    /// "2021-23" for years 2021..=2023; a single year stands alone.
    fn year_span(&self) -> String {
        match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) if first != last => {
                format!("{}-{:02}", first, last % 100)
            }
            (Some(first), _) => first.to_string(),
            (None, _) => "all".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: PathSettings::default(),
            source: SourceConfig::default(),
            years: vec![2021, 2022, 2023],
            cleaning: CleaningSettings::default(),
            split: SplitConfig::default(),
        }
    }
}
