//! Fuel Type Canonicalization

use emission_record::FuelClass;

/// Classify a raw fuel-type string.
///
/// The raw value is lower-cased and looked up in a fixed translation
/// table. Canonical class names are accepted too, so re-running the
/// normalizer over already-clean data is a no-op. The literal "unknown"
/// and any token outside the table return `None` and the record is
/// dropped by the caller.
pub fn classify_fuel(raw: &str) -> Option<FuelClass> {
    match raw.to_lowercase().as_str() {
        "petrol" | "hydrogen" | "e85" | "lpg" | "ng" | "ng-biomethane" | "essence" => {
            Some(FuelClass::Essence)
        }
        "diesel" => Some(FuelClass::Diesel),
        "petrol/electric" | "diesel/electric" | "hybride" => Some(FuelClass::Hybride),
        "electric" | "electrique" => Some(FuelClass::Electrique),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_table() {
        assert_eq!(classify_fuel("Petrol"), Some(FuelClass::Essence));
        assert_eq!(classify_fuel("hydrogen"), Some(FuelClass::Essence));
        assert_eq!(classify_fuel("E85"), Some(FuelClass::Essence));
        assert_eq!(classify_fuel("lpg"), Some(FuelClass::Essence));
        assert_eq!(classify_fuel("ng"), Some(FuelClass::Essence));
        assert_eq!(classify_fuel("NG-Biomethane"), Some(FuelClass::Essence));
        assert_eq!(classify_fuel("Diesel"), Some(FuelClass::Diesel));
        assert_eq!(classify_fuel("Petrol/Electric"), Some(FuelClass::Hybride));
        assert_eq!(classify_fuel("diesel/electric"), Some(FuelClass::Hybride));
        assert_eq!(classify_fuel("Electric"), Some(FuelClass::Electrique));
    }

    #[test]
    fn test_unknown_and_unmapped_are_dropped() {
        assert_eq!(classify_fuel("Unknown"), None);
        assert_eq!(classify_fuel("unknown"), None);
        assert_eq!(classify_fuel("biodiesel"), None);
        assert_eq!(classify_fuel(""), None);
    }

    #[test]
    fn test_canonical_names_are_accepted() {
        // Re-cleaning already-normalized data must not drop anything.
        for class in [
            FuelClass::Essence,
            FuelClass::Diesel,
            FuelClass::Hybride,
            FuelClass::Electrique,
        ] {
            assert_eq!(classify_fuel(class.as_str()), Some(class));
        }
    }
}
