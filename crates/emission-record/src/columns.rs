//! Canonical Column Set

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// The ten wire column names every input must carry.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Mk",
    "Cn",
    "M (kg)",
    "Ewltp (g/km)",
    "Ft",
    "Ec (cm3)",
    "Ep (KW)",
    "Erwltp (g/km)",
    "Year",
    "Fc",
];

/// One of the six numeric measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericColumn {
    Co2,
    FuelConsumption,
    Mass,
    EngineCapacity,
    EnginePower,
    Correction,
}

impl NumericColumn {
    /// Fixed order in which outlier filtering walks the numeric columns.
    pub const OUTLIER_ORDER: [NumericColumn; 6] = [
        NumericColumn::Co2,
        NumericColumn::FuelConsumption,
        NumericColumn::Mass,
        NumericColumn::EngineCapacity,
        NumericColumn::EnginePower,
        NumericColumn::Correction,
    ];

    /// Wire column name.
    pub fn name(&self) -> &'static str {
        match self {
            NumericColumn::Co2 => "Ewltp (g/km)",
            NumericColumn::FuelConsumption => "Fc",
            NumericColumn::Mass => "M (kg)",
            NumericColumn::EngineCapacity => "Ec (cm3)",
            NumericColumn::EnginePower => "Ep (KW)",
            NumericColumn::Correction => "Erwltp (g/km)",
        }
    }

    /// Read this column's value out of a record.
    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            NumericColumn::Co2 => record.co2_g_per_km,
            NumericColumn::FuelConsumption => record.fuel_consumption,
            NumericColumn::Mass => record.mass_kg,
            NumericColumn::EngineCapacity => record.engine_capacity_cm3,
            NumericColumn::EnginePower => record.engine_power_kw,
            NumericColumn::Correction => record.correction_g_per_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlier_order_starts_with_target() {
        assert_eq!(NumericColumn::OUTLIER_ORDER[0], NumericColumn::Co2);
        assert_eq!(NumericColumn::OUTLIER_ORDER.len(), 6);
    }

    #[test]
    fn test_every_numeric_column_is_required() {
        for col in NumericColumn::OUTLIER_ORDER {
            assert!(REQUIRED_COLUMNS.contains(&col.name()));
        }
    }
}
