//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dynamo2csv` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status and error reporting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dynamo2csv::initialization::init_logger_with;
use dynamo2csv::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // AWS_PROFILE, AWS_REGION and RUST_LOG may come from a local .env file
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // stdout carries the CSV, so everything else goes to stderr
    if let Err(e) = run_export(config).await {
        eprintln!("dynamo2csv error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
