//! Fuel Type Classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical fuel class.
///
/// `Electrique` and `Hybride` are valid intermediate states during
/// cleaning; the final training set only contains `Essence` and `Diesel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelClass {
    Essence,
    Diesel,
    Hybride,
    Electrique,
}

impl FuelClass {
    /// Canonical string form, as written to the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelClass::Essence => "Essence",
            FuelClass::Diesel => "Diesel",
            FuelClass::Hybride => "Hybride",
            FuelClass::Electrique => "Electrique",
        }
    }

    /// Whether this class belongs in the final training set.
    pub fn is_trainable(&self) -> bool {
        matches!(self, FuelClass::Essence | FuelClass::Diesel)
    }
}

impl fmt::Display for FuelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
