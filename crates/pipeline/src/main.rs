//! Emission Pipeline - Main Entry Point

use clap::{Parser, Subcommand};
use pipeline::settings::Settings;
use pipeline::{init_logging, stages};
use tracing::info;

#[derive(Parser)]
#[command(name = "emission-pipeline")]
#[command(about = "Batch pipeline for the EEA vehicle CO2 emission dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the configured tables and write per-year raw files
    Import,
    /// Merge the per-year raw files into one dataset
    Concatenate,
    /// Clean and encode the concatenated dataset
    Preprocess,
    /// Partition the processed dataset into train/test artifacts
    Split,
    /// Fit the regression and write model, scores, and predictions
    Train,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!("=== Emission Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Import => stages::import::run(&settings).await?,
        Commands::Concatenate => stages::concatenate::run(&settings)?,
        Commands::Preprocess => stages::preprocess::run(&settings)?,
        Commands::Split => stages::split::run(&settings)?,
        Commands::Train => stages::train::run(&settings)?,
    }

    Ok(())
}
