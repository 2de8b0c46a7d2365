//! domain_resolver library: registrable domain resolution for domain lists
//!
//! This library reads newline-delimited domain-like strings from a file, cleans
//! each entry (line terminators and a trailing `.tld` placeholder are removed),
//! and resolves each to its registrable domain using the Public Suffix List.
//!
//! # Example
//!
//! ```no_run
//! use domain_resolver::{run_resolve, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("stripped_emails.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_resolve(config)?;
//! println!("Processed {} lines: {} resolved, {} unresolved",
//!          report.total_lines, report.resolved, report.unresolved);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod input;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_resolve, ResolveReport};

// Internal run module (contains the main resolution loop)
mod run {
    use anyhow::Result;
    use log::{info, warn};

    use crate::config::{Config, UNRESOLVED_TOKEN};
    use crate::domain::resolve;
    use crate::initialization::init_extractor;
    use crate::input::load_domains;

    /// Results of a resolution run.
    ///
    /// Contains summary statistics about the completed run.
    #[derive(Debug, Clone)]
    pub struct ResolveReport {
        /// Total number of input lines processed
        pub total_lines: usize,
        /// Number of lines that resolved to a registrable domain
        pub resolved: usize,
        /// Number of lines that yielded the failure marker
        pub unresolved: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a resolution pass with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads domain strings
    /// from the input file, resolves each one in order against the Public
    /// Suffix List, and prints one result per input line to stdout: the
    /// registrable domain, or the literal token `none` when the line has no
    /// registrable domain.
    ///
    /// Processing is strictly sequential. A per-line resolution failure is
    /// never fatal; it only produces the `none` token for that line.
    ///
    /// # Errors
    ///
    /// An unreadable input file is NOT an error here: the original tool
    /// swallowed read failures and produced an empty run, and that outcome is
    /// kept deliberately, but the failure is surfaced to the operator as a
    /// warning instead of being hidden.
    pub fn run_resolve(config: Config) -> Result<ResolveReport> {
        let start_time = std::time::Instant::now();

        let extractor = init_extractor();

        let domains = match load_domains(&config.file) {
            Ok(domains) => domains,
            Err(e) => {
                // Intentional degradation: an unreadable input file yields an
                // empty run with exit code 0, matching the original behavior.
                warn!("{e}; continuing with no input");
                Vec::new()
            }
        };

        let total_lines = domains.len();
        info!(
            "Loaded {} line(s) from {}",
            total_lines,
            config.file.display()
        );

        let mut resolved = 0usize;
        let mut unresolved = 0usize;

        for domain in &domains {
            match resolve(&extractor, domain) {
                Some(registrable) => {
                    resolved += 1;
                    println!("{registrable}");
                }
                None => {
                    unresolved += 1;
                    println!("{UNRESOLVED_TOKEN}");
                }
            }
        }

        Ok(ResolveReport {
            total_lines,
            resolved,
            unresolved,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
