//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_check::initialization::init_logger_with;
use domain_check::{run_check, Config, LogFormat, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(opt);

    init_logger_with(LogFormat::from_env()).context("Failed to initialize logger")?;

    match run_check(config).await {
        Ok(report) => {
            if let Some(path) = &report.output {
                println!("Results saved to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_check error: {:#}", e);
            process::exit(1);
        }
    }
}
