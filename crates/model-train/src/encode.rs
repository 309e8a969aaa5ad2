//! One-Hot Feature Encoding

use dataset_store::ProcessedDataset;
use emission_record::{FuelClass, Record};
use std::collections::BTreeSet;
use tracing::info;

/// Numeric passthrough columns, in dataset order.
const NUMERIC_FEATURES: [&str; 6] = [
    "M (kg)",
    "Ec (cm3)",
    "Ep (KW)",
    "Erwltp (g/km)",
    "Year",
    "Fc",
];

/// All fuel classes in canonical order; the first class present in the
/// input becomes the baseline.
const FUEL_ORDER: [FuelClass; 4] = [
    FuelClass::Essence,
    FuelClass::Diesel,
    FuelClass::Hybride,
    FuelClass::Electrique,
];

/// Encode a cleaned record set into the training table: numeric columns
/// pass through, fuel type and manufacturer become 0/1 indicator
/// columns (`Ft_*` in canonical class order, `Mk_*` alphabetically).
///
/// The first category of each categorical is the baseline and gets no
/// column; a full indicator set would be collinear with the intercept
/// of the downstream least-squares fit. The commercial name stays as
/// the identifier and WLTP CO2 as the target.
pub fn encode_one_hot(records: &[Record]) -> ProcessedDataset {
    let fuel_classes: Vec<FuelClass> = FUEL_ORDER
        .into_iter()
        .filter(|class| records.iter().any(|r| r.fuel_type == *class))
        .skip(1)
        .collect();
    let brands: Vec<String> = records
        .iter()
        .map(|r| r.manufacturer.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .skip(1)
        .collect();

    let mut feature_names: Vec<String> =
        NUMERIC_FEATURES.iter().map(|n| n.to_string()).collect();
    feature_names.extend(fuel_classes.iter().map(|c| format!("Ft_{c}")));
    feature_names.extend(brands.iter().map(|b| format!("Mk_{b}")));

    let mut names = Vec::with_capacity(records.len());
    let mut target = Vec::with_capacity(records.len());
    let mut features = Vec::with_capacity(records.len());
    for record in records {
        names.push(record.commercial_name.clone());
        target.push(record.co2_g_per_km);

        let mut row = vec![
            record.mass_kg,
            record.engine_capacity_cm3,
            record.engine_power_kw,
            record.correction_g_per_km,
            record.year as f64,
            record.fuel_consumption,
        ];
        for class in &fuel_classes {
            row.push(if record.fuel_type == *class { 1.0 } else { 0.0 });
        }
        for brand in &brands {
            row.push(if record.manufacturer == *brand { 1.0 } else { 0.0 });
        }
        features.push(row);
    }

    info!(
        "Encoded {} rows into {} feature columns",
        records.len(),
        feature_names.len()
    );
    ProcessedDataset {
        feature_names,
        names,
        target,
        features,
    }
}
