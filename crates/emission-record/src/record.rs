//! Record Types

use crate::fuel::FuelClass;
use serde::{Deserialize, Serialize};

/// One row as parsed from a CSV file or an API response.
///
/// Every field is optional: upstream data may carry empty cells, and the
/// cleaner decides which rows survive. Field names map to the dataset's
/// wire column names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Manufacturer
    #[serde(rename = "Mk")]
    pub manufacturer: Option<String>,
    /// Commercial name
    #[serde(rename = "Cn")]
    pub commercial_name: Option<String>,
    /// Mass in running order (kg)
    #[serde(rename = "M (kg)")]
    pub mass_kg: Option<f64>,
    /// WLTP CO2 emissions (g/km), the prediction target
    #[serde(rename = "Ewltp (g/km)")]
    pub co2_g_per_km: Option<f64>,
    /// Fuel type, raw categorical string
    #[serde(rename = "Ft")]
    pub fuel_type: Option<String>,
    /// Engine capacity (cm3)
    #[serde(rename = "Ec (cm3)")]
    pub engine_capacity_cm3: Option<f64>,
    /// Engine power (kW)
    #[serde(rename = "Ep (KW)")]
    pub engine_power_kw: Option<f64>,
    /// Real-world correction factor (g/km)
    #[serde(rename = "Erwltp (g/km)")]
    pub correction_g_per_km: Option<f64>,
    /// Model year
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    /// Fuel consumption
    #[serde(rename = "Fc")]
    pub fuel_consumption: Option<f64>,
}

/// A complete, typed observation.
///
/// Serializing a slice of these yields the canonical output column set;
/// projection is the type itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Mk")]
    pub manufacturer: String,
    #[serde(rename = "Cn")]
    pub commercial_name: String,
    #[serde(rename = "M (kg)")]
    pub mass_kg: f64,
    #[serde(rename = "Ewltp (g/km)")]
    pub co2_g_per_km: f64,
    #[serde(rename = "Ft")]
    pub fuel_type: FuelClass,
    #[serde(rename = "Ec (cm3)")]
    pub engine_capacity_cm3: f64,
    #[serde(rename = "Ep (KW)")]
    pub engine_power_kw: f64,
    #[serde(rename = "Erwltp (g/km)")]
    pub correction_g_per_km: f64,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Fc")]
    pub fuel_consumption: f64,
}

impl Record {
    /// Build a record from a raw row, requiring every field to be present.
    ///
    /// The fuel class is supplied by the caller since fuel normalization
    /// happens before the completeness check.
    pub fn from_raw(raw: RawRecord, fuel_type: FuelClass) -> Option<Self> {
        Some(Self {
            manufacturer: raw.manufacturer?,
            commercial_name: raw.commercial_name?,
            mass_kg: raw.mass_kg?,
            co2_g_per_km: raw.co2_g_per_km?,
            fuel_type,
            engine_capacity_cm3: raw.engine_capacity_cm3?,
            engine_power_kw: raw.engine_power_kw?,
            correction_g_per_km: raw.correction_g_per_km?,
            year: raw.year?,
            fuel_consumption: raw.fuel_consumption?,
        })
    }
}
