//! Record Cleaning and Statistical Outlier Filtering
//!
//! Turns raw emission rows into a clean training set:
//! - Fuel-type and manufacturer canonicalization
//! - Missing-value and duplicate removal (two dedup scopes)
//! - Group-wise IQR outlier filtering per numeric column

mod brand;
mod cleaner;
mod fuel;
mod outlier;
mod stats;

pub use brand::{canonical_brand, is_excluded_brand};
pub use cleaner::{CleanConfig, CleanReport, DedupScope, RecordCleaner, StageCount};
pub use fuel::classify_fuel;
pub use outlier::{OutlierFilter, OutlierSummary};
