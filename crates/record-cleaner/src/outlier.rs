//! Group-wise IQR Outlier Filtering

use crate::stats;
use emission_record::{FuelClass, NumericColumn, Record};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Default IQR multiplier for the outlier threshold.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Outcome of one outlier pass over one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct OutlierSummary {
    /// Column the pass filtered on
    pub column: NumericColumn,
    /// Threshold applied to the deviation distribution
    pub threshold: f64,
    /// Records dropped by this pass
    pub removed: usize,
    /// Records surviving this pass
    pub retained: usize,
    /// Groups with a single member (deviation pinned to zero)
    pub singleton_groups: usize,
    /// Whether the deviation distribution had zero IQR
    pub degenerate: bool,
}

/// Statistical outlier filter over (commercial name, fuel type, year)
/// groups.
///
/// For each record the absolute deviation from its group's column mean
/// is computed; Q1/Q3 of the deviation distribution over the whole
/// working set give the threshold Q3 + k * IQR. Records above the
/// threshold are dropped.
pub struct OutlierFilter {
    iqr_multiplier: f64,
}

impl OutlierFilter {
    pub fn new(iqr_multiplier: f64) -> Self {
        Self { iqr_multiplier }
    }

    /// Run one pass over a single column.
    pub fn filter_column(
        &self,
        records: Vec<Record>,
        column: NumericColumn,
    ) -> (Vec<Record>, OutlierSummary) {
        if records.is_empty() {
            return (
                records,
                OutlierSummary {
                    column,
                    threshold: 0.0,
                    removed: 0,
                    retained: 0,
                    singleton_groups: 0,
                    degenerate: false,
                },
            );
        }

        let singleton_groups;
        let deviations: Vec<f64> = {
            let mut groups: HashMap<(&str, FuelClass, i32), Vec<f64>> = HashMap::new();
            for record in &records {
                groups
                    .entry((record.commercial_name.as_str(), record.fuel_type, record.year))
                    .or_default()
                    .push(column.value_of(record));
            }
            singleton_groups = groups.values().filter(|v| v.len() == 1).count();

            let means: HashMap<_, f64> = groups
                .into_iter()
                .map(|(key, values)| (key, stats::mean(&values)))
                .collect();

            records
                .iter()
                .map(|record| {
                    let mean =
                        means[&(record.commercial_name.as_str(), record.fuel_type, record.year)];
                    (column.value_of(record) - mean).abs()
                })
                .collect()
        };

        let mut sorted = deviations.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let q1 = stats::quantile(&sorted, 0.25);
        let q3 = stats::quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let threshold = q3 + self.iqr_multiplier * iqr;

        if iqr == 0.0 {
            warn!(
                "Degenerate deviation distribution for {}: IQR is zero, threshold pinned to Q3 ({})",
                column.name(),
                threshold
            );
        }
        if singleton_groups > 0 {
            debug!(
                "{} singleton groups in pass over {}",
                singleton_groups,
                column.name()
            );
        }

        let total = records.len();
        let retained: Vec<Record> = records
            .into_iter()
            .zip(&deviations)
            .filter(|(_, deviation)| **deviation <= threshold)
            .map(|(record, _)| record)
            .collect();

        let summary = OutlierSummary {
            column,
            threshold,
            removed: total - retained.len(),
            retained: retained.len(),
            singleton_groups,
            degenerate: iqr == 0.0,
        };
        info!(
            "Outliers for {} (threshold {:.1}): {} removed, {} rows remaining",
            column.name(),
            summary.threshold,
            summary.removed,
            summary.retained
        );

        (retained, summary)
    }
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IQR_MULTIPLIER)
    }
}
