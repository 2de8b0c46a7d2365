//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_resolver::initialization::init_logger_with;
use domain_resolver::{run_resolve, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_resolve(config) {
        Ok(report) => {
            log::info!(
                "Processed {} line{} ({} resolved, {} unresolved) in {:.1}s",
                report.total_lines,
                if report.total_lines == 1 { "" } else { "s" },
                report.resolved,
                report.unresolved,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_resolver error: {:#}", e);
            process::exit(1);
        }
    }
}
