//! Emission Pipeline
//!
//! Five batch stages over the EEA CO2 dataset: import, concatenate,
//! preprocess, split, train. Each stage reads the previous stage's
//! artifacts from disk and writes its own.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub mod settings;
pub mod stages;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
