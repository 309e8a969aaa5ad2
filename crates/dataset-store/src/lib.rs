//! Dataset Persistence Layer
//!
//! CSV reading/writing with schema validation for record sets, the
//! encoded training table, split matrices, and JSON pipeline artifacts.

mod artifacts;
mod error;
mod matrix;
mod processed;
mod records;

pub use artifacts::{read_json, write_json, ImportMetadata};
pub use error::StoreError;
pub use matrix::{read_matrix, read_target, write_matrix, write_target};
pub use processed::ProcessedDataset;
pub use records::{read_raw_records, write_raw_records, write_records};
