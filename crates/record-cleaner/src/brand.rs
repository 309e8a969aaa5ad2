//! Manufacturer Name Canonicalization

/// Canonical brand names, scanned in order; the first name *contained*
/// in the upper-cased raw string wins. An ordered slice, not a set, so
/// tie-breaks are reproducible.
const TARGET_BRANDS: [&str; 39] = [
    "CITROEN",
    "FORD",
    "FIAT",
    "RENAULT",
    "MERCEDES",
    "BMW",
    "VOLKSWAGEN",
    "ALPINE",
    "INEOS",
    "LAMBORGHINI",
    "TOYOTA",
    "JAGUAR",
    "GREAT WALL MOTOR",
    "CATERHAM",
    "PEUGEOT",
    "MAN",
    "OPEL",
    "ALLIED VEHICLES",
    "IVECO",
    "MITSUBISHI",
    "DS",
    "MAZDA",
    "SUZUKI",
    "SUBARU",
    "HYUNDAI",
    "AUDI",
    "NISSAN",
    "SKODA",
    "SEAT",
    "DACIA",
    "VOLVO",
    "KIA",
    "LAND ROVER",
    "MINI",
    "PORSCHE",
    "ALFA ROMEO",
    "SMART",
    "LANCIA",
    "JEEP",
];

/// Exact-match overrides for known aliases, misspellings, and legal
/// entity names. Applied after the substring scan; "DS" would otherwise
/// stay a brand of its own.
const BRAND_ALIASES: [(&str, &str); 8] = [
    ("DS", "CITROEN"),
    ("VW", "VOLKSWAGEN"),
    ("?KODA", "SKODA"),
    ("\u{160}KODA", "SKODA"),
    ("PSA AUTOMOBILES SA", "PEUGEOT"),
    ("FCA ITALY", "FIAT"),
    ("ALFA  ROMEO", "ALFA ROMEO"),
    ("LANDROVER", "LAND ROVER"),
];

/// Junk and non-automotive entries removed from the dataset.
const EXCLUDED_BRANDS: [&str; 9] = [
    "TRIPOD",
    "API CZ",
    "MOTO STAR",
    "REMOLQUES RAMIREZ",
    "AIR-BRAKES",
    "SIN MARCA",
    "WAVECAMPER",
    "CASELANI",
    "PANDA",
];

/// Canonicalize a raw manufacturer string.
///
/// Upper-cases, substring-matches against the ordered target list, then
/// applies the exact-match alias table. A brand matching nothing keeps
/// its upper-cased raw form.
pub fn canonical_brand(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let brand = TARGET_BRANDS
        .iter()
        .find(|target| upper.contains(**target))
        .map(|target| (*target).to_string())
        .unwrap_or(upper);

    for (alias, canonical) in BRAND_ALIASES {
        if brand == alias {
            return canonical.to_string();
        }
    }
    brand
}

/// Whether a canonical brand is on the exclusion list.
pub fn is_excluded_brand(brand: &str) -> bool {
    EXCLUDED_BRANDS.contains(&brand)
}
