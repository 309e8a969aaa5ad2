//! Cleaning Pipeline Orchestration

use crate::brand;
use crate::fuel::classify_fuel;
use crate::outlier::{OutlierFilter, OutlierSummary, DEFAULT_IQR_MULTIPLIER};
use emission_record::{FuelClass, NumericColumn, RawRecord, Record};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Which columns take part in duplicate detection.
///
/// The import entry point runs on freshly fetched multi-year data and
/// collapses the same model sold across years and trims; the preprocess
/// entry point runs on an already-concatenated file and removes exact
/// duplicates only. The two scopes are a deliberate asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedupScope {
    /// Compare all columns except commercial name and model year.
    ExcludeNameAndYear,
    /// Compare every column.
    FullRow,
}

/// Cleaning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Duplicate-detection scope
    pub dedup_scope: DedupScope,
    /// Minimum records per brand; rarer brands are dropped entirely
    pub min_brand_support: usize,
    /// IQR multiplier for the outlier threshold
    pub iqr_multiplier: f64,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            dedup_scope: DedupScope::FullRow,
            min_brand_support: 5,
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
        }
    }
}

/// Row counts around one cleaning stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageCount {
    pub stage: String,
    pub rows_in: usize,
    pub rows_out: usize,
}

/// Observability record of one cleaning run: per-stage row counts plus
/// the outlier pass summaries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    pub stages: Vec<StageCount>,
    pub outliers: Vec<OutlierSummary>,
}

impl CleanReport {
    fn stage(&mut self, stage: &str, rows_in: usize, rows_out: usize) {
        info!("Stage {}: {} rows in, {} rows out", stage, rows_in, rows_out);
        self.stages.push(StageCount {
            stage: stage.to_string(),
            rows_in,
            rows_out,
        });
    }

    /// Rows surviving the full run.
    pub fn final_rows(&self) -> usize {
        self.stages.last().map(|s| s.rows_out).unwrap_or(0)
    }
}

/// Orchestrates one pass over a raw record set: fuel normalization,
/// missing-value removal, brand normalization, deduplication, outlier
/// filtering, and the final hybrid drop.
pub struct RecordCleaner {
    config: CleanConfig,
}

impl RecordCleaner {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// Run the full cleaning pipeline.
    ///
    /// Never fails: malformed categorical values are corrected or
    /// filtered, not raised. Schema errors belong to the I/O layer.
    pub fn clean(&self, rows: Vec<RawRecord>) -> (Vec<Record>, CleanReport) {
        let mut report = CleanReport::default();

        // Fuel normalization. Unknown and unmapped fuels drop here, as do
        // electric vehicles; hybrids stay until the end of the pipeline so
        // they still count in the outlier group denominators. Rows with a
        // missing fuel cell fall through to the completeness check.
        let rows_in = rows.len();
        let staged: Vec<(RawRecord, Option<FuelClass>)> = rows
            .into_iter()
            .filter_map(|raw| match raw.fuel_type.as_deref() {
                None => Some((raw, None)),
                Some(value) => match classify_fuel(value) {
                    None | Some(FuelClass::Electrique) => None,
                    Some(class) => Some((raw, Some(class))),
                },
            })
            .collect();
        report.stage("fuel", rows_in, staged.len());

        // Missing-value removal; survivors become typed records.
        let rows_in = staged.len();
        let mut records: Vec<Record> = staged
            .into_iter()
            .filter_map(|(raw, class)| Record::from_raw(raw, class?))
            .collect();
        report.stage("missing", rows_in, records.len());

        // Brand normalization: canonicalize, drop excluded brands, then
        // drop brands below minimum support. Frequency counts run last,
        // after aliases have settled which bucket each record counts in.
        let rows_in = records.len();
        for record in &mut records {
            record.manufacturer = brand::canonical_brand(&record.manufacturer);
        }
        records.retain(|r| !brand::is_excluded_brand(&r.manufacturer));
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in &records {
            *counts.entry(record.manufacturer.clone()).or_insert(0) += 1;
        }
        records.retain(|r| counts[&r.manufacturer] >= self.config.min_brand_support);
        report.stage("brand", rows_in, records.len());

        // Duplicate removal, first occurrence wins.
        let rows_in = records.len();
        let mut seen = HashSet::new();
        records.retain(|r| seen.insert(DedupKey::of(r, self.config.dedup_scope)));
        report.stage("dedup", rows_in, records.len());

        // Sequential outlier passes; each pass sees the previous pass's
        // output, so the filtering compounds in the fixed column order.
        let filter = OutlierFilter::new(self.config.iqr_multiplier);
        for column in NumericColumn::OUTLIER_ORDER {
            let rows_in = records.len();
            let (kept, summary) = filter.filter_column(records, column);
            records = kept;
            report.stage(&format!("outliers {}", column.name()), rows_in, records.len());
            report.outliers.push(summary);
        }

        // Hybrids leave last.
        let rows_in = records.len();
        records.retain(|r| r.fuel_type.is_trainable());
        report.stage("hybride", rows_in, records.len());

        (records, report)
    }
}

impl Default for RecordCleaner {
    fn default() -> Self {
        Self::new(CleanConfig::default())
    }
}

/// Hashable duplicate-detection key; float columns compare by bit
/// pattern, matching exact-value duplicate semantics.
#[derive(Hash, PartialEq, Eq)]
struct DedupKey {
    manufacturer: String,
    commercial_name: Option<String>,
    year: Option<i32>,
    fuel_type: FuelClass,
    mass: u64,
    co2: u64,
    capacity: u64,
    power: u64,
    correction: u64,
    consumption: u64,
}

impl DedupKey {
    fn of(record: &Record, scope: DedupScope) -> Self {
        let (commercial_name, year) = match scope {
            DedupScope::ExcludeNameAndYear => (None, None),
            DedupScope::FullRow => (Some(record.commercial_name.clone()), Some(record.year)),
        };
        Self {
            manufacturer: record.manufacturer.clone(),
            commercial_name,
            year,
            fuel_type: record.fuel_type,
            mass: record.mass_kg.to_bits(),
            co2: record.co2_g_per_km.to_bits(),
            capacity: record.engine_capacity_cm3.to_bits(),
            power: record.engine_power_kw.to_bits(),
            correction: record.correction_g_per_km.to_bits(),
            consumption: record.fuel_consumption.to_bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(brand: &str, name: &str, fuel: &str, year: i32, co2: f64) -> RawRecord {
        RawRecord {
            manufacturer: Some(brand.to_string()),
            commercial_name: Some(name.to_string()),
            mass_kg: Some(1200.0),
            co2_g_per_km: Some(co2),
            fuel_type: Some(fuel.to_string()),
            engine_capacity_cm3: Some(1500.0),
            engine_power_kw: Some(80.0),
            correction_g_per_km: Some(1.0),
            year: Some(year),
            fuel_consumption: Some(5.5),
        }
    }

    /// Six distinct petrol rows per brand, enough to clear brand support.
    fn fleet(brand: &str, name: &str) -> Vec<RawRecord> {
        (0..6)
            .map(|i| raw(brand, name, "petrol", 2021 + (i % 3), 110.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_fuel_stage_example() {
        // 3 of 5 rows survive fuel normalization; the hybrid row is
        // gone by the end of the run.
        let mut rows = Vec::new();
        for (i, fuel) in ["Petrol", "Diesel", "Unknown", "Electric", "Diesel/Electric"]
            .into_iter()
            .enumerate()
        {
            // Distinct names keep dedup and outlier passes out of the way.
            rows.push(raw("RENAULT", &format!("m{i}"), fuel, 2022, 100.0 + i as f64));
        }
        // Pad the brand over the support threshold.
        rows.extend(fleet("RENAULT", "pad"));

        let cleaner = RecordCleaner::default();
        let (records, report) = cleaner.clean(rows);

        let fuel_stage = &report.stages[0];
        assert_eq!(fuel_stage.stage, "fuel");
        assert_eq!(fuel_stage.rows_in - fuel_stage.rows_out, 2);

        // Only Essence and Diesel remain at the end.
        assert!(records.iter().all(|r| r.fuel_type.is_trainable()));
        assert!(records.iter().all(|r| r.commercial_name != "m4"));
    }

    #[test]
    fn test_hybrids_survive_until_after_outliers() {
        let mut rows = fleet("FIAT", "500");
        rows.push(raw("FIAT", "500", "petrol/electric", 2022, 90.0));

        let (records, report) = RecordCleaner::default().clean(rows);

        // The hybrid entered every outlier pass...
        assert!(report.outliers[0].retained + report.outliers[0].removed >= 7);
        // ...and was removed by the final stage, not the fuel stage.
        let hybride_stage = report.stages.last().unwrap();
        assert_eq!(hybride_stage.stage, "hybride");
        assert_eq!(hybride_stage.rows_in - hybride_stage.rows_out, 1);
        assert!(records.iter().all(|r| r.fuel_type != FuelClass::Hybride));
    }

    #[test]
    fn test_missing_values_dropped() {
        let mut rows = fleet("FORD", "FIESTA");
        let mut incomplete = raw("FORD", "FIESTA", "petrol", 2022, 120.0);
        incomplete.mass_kg = None;
        rows.push(incomplete);

        let (_, report) = RecordCleaner::default().clean(rows);
        let missing = &report.stages[1];
        assert_eq!(missing.stage, "missing");
        assert_eq!(missing.rows_in - missing.rows_out, 1);
    }

    #[test]
    fn test_brand_support_threshold() {
        let mut rows = fleet("TOYOTA", "YARIS");
        // Four NISSAN rows: below the support threshold of five.
        rows.extend(
            (0..4).map(|i| raw("NISSAN", "MICRA", "petrol", 2021, 100.0 + i as f64)),
        );

        let (records, _) = RecordCleaner::default().clean(rows);
        assert!(records.iter().all(|r| r.manufacturer == "TOYOTA"));

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in &records {
            *counts.entry(r.manufacturer.as_str()).or_insert(0) += 1;
        }
        assert!(counts.values().all(|&n| n >= 5));
    }

    #[test]
    fn test_excluded_brands_dropped() {
        let mut rows = fleet("SUZUKI", "SWIFT");
        rows.extend(fleet("PANDA", "JUNK"));

        let (records, _) = RecordCleaner::default().clean(rows);
        assert!(records.iter().all(|r| r.manufacturer == "SUZUKI"));
    }

    #[test]
    fn test_dedup_scope_asymmetry() {
        // Same car, two model years: a full-row comparison keeps both,
        // excluding name and year collapses them.
        let mut rows = fleet("KIA", "pad");
        rows.push(raw("KIA", "RIO", "petrol", 2021, 200.0));
        rows.push(raw("KIA", "RIO", "petrol", 2022, 200.0));

        let full = RecordCleaner::new(CleanConfig {
            dedup_scope: DedupScope::FullRow,
            ..CleanConfig::default()
        });
        let collapsed = RecordCleaner::new(CleanConfig {
            dedup_scope: DedupScope::ExcludeNameAndYear,
            ..CleanConfig::default()
        });

        let (_, full_report) = full.clean(rows.clone());
        let (_, collapsed_report) = collapsed.clean(rows);

        let dedup_removed = |report: &CleanReport| {
            let s = report.stages.iter().find(|s| s.stage == "dedup").unwrap();
            s.rows_in - s.rows_out
        };
        assert_eq!(dedup_removed(&full_report), 0);
        assert!(dedup_removed(&collapsed_report) >= 1);
    }

    #[test]
    fn test_normalization_idempotence() {
        let rows: Vec<RawRecord> = fleet("Ford Motor Co", "FOCUS")
            .into_iter()
            .chain(fleet("vw", "GOLF"))
            .collect();

        let cleaner = RecordCleaner::default();
        let (once, _) = cleaner.clean(rows);

        // Feed the cleaned output back through as raw rows.
        let again: Vec<RawRecord> = once
            .iter()
            .map(|r| RawRecord {
                manufacturer: Some(r.manufacturer.clone()),
                commercial_name: Some(r.commercial_name.clone()),
                mass_kg: Some(r.mass_kg),
                co2_g_per_km: Some(r.co2_g_per_km),
                fuel_type: Some(r.fuel_type.to_string()),
                engine_capacity_cm3: Some(r.engine_capacity_cm3),
                engine_power_kw: Some(r.engine_power_kw),
                correction_g_per_km: Some(r.correction_g_per_km),
                year: Some(r.year),
                fuel_consumption: Some(r.fuel_consumption),
            })
            .collect();

        let (twice, _) = cleaner.clean(again);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_report_tracks_every_stage() {
        let (_, report) = RecordCleaner::default().clean(fleet("OPEL", "CORSA"));
        let names: Vec<&str> = report.stages.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(names[..4], ["fuel", "missing", "brand", "dedup"]);
        assert_eq!(names[names.len() - 1], "hybride");
        assert_eq!(report.outliers.len(), NumericColumn::OUTLIER_ORDER.len());
        assert_eq!(report.final_rows(), report.stages.last().unwrap().rows_out);
    }
}
