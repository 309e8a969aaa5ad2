//! Domain Types for CO2 Emission Records
//!
//! One vehicle model-year observation per record, with the exact wire
//! column names of the upstream EEA dataset.

mod columns;
mod fuel;
mod record;

pub use columns::{NumericColumn, REQUIRED_COLUMNS};
pub use fuel::FuelClass;
pub use record::{RawRecord, Record};
