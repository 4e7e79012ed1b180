//! domain_check library: batch HTTP status checking
//!
//! Reads a list of domains, sends one GET to each through a bounded worker
//! pool, and reports the HTTP status code (or the failure text) per domain.
//!
//! # Example
//!
//! ```no_run
//! use domain_check::{run_check, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("domains.txt"),
//!     output: Some(PathBuf::from("results.txt")),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!("{} responded, {} failed", report.responded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod dispatch;
mod error_handling;
mod fetch;
pub mod initialization;
mod input;
mod report;

// Re-export public API
pub use app::ensure_scheme;
pub use config::{Config, LogFormat, Opt};
pub use dispatch::{dispatch, CheckResults};
pub use error_handling::{
    ErrorType, InfoType, InitializationError, InputError, OutputError, ProcessingStats,
};
pub use fetch::{error_chain_message, HttpProbe, Outcome, StatusProbe};
pub use input::read_domains;
pub use report::{format_progress_line, format_result_line, write_results};
pub use run::{run_check, run_check_with_probe, CheckReport};

// Internal run module (contains the main checking pipeline)
mod run {
    use anyhow::{Context, Result};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        log_progress, print_error_statistics, print_summary, shutdown_gracefully,
        spawn_progress_logger,
    };
    use crate::config::{Config, LOGGING_INTERVAL};
    use crate::dispatch::{dispatch, CheckResults};
    use crate::error_handling::ProcessingStats;
    use crate::fetch::{HttpProbe, StatusProbe};
    use crate::initialization::init_client;
    use crate::input::read_domains;
    use crate::report::{format_progress_line, write_results};

    /// Results of a checking run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of domains read from the input (one request each)
        pub total_domains: usize,
        /// Checks that received an HTTP response, any status
        pub responded: usize,
        /// Checks that ended in a request error
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Results file that was written, if one was requested
        pub output: Option<PathBuf>,
        /// Outcome per normalized URL
        pub results: CheckResults,
    }

    /// Runs a full check with the real HTTP client.
    ///
    /// Reads the domains from `config.file`, checks each one, prints a
    /// `Domain: <url> | Status: <outcome>` line per completion to stdout, and
    /// writes the results file when `config.output` is set.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built
    /// - The input file cannot be read (no request is sent)
    /// - The results file cannot be written (after all requests completed)
    ///
    /// Individual request failures are not errors; they are part of the report.
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let probe = Arc::new(HttpProbe::new(client, Arc::new(ProcessingStats::new())));

        let report = run_check_with_probe(config, Arc::clone(&probe)).await?;

        print_error_statistics(probe.error_stats());
        Ok(report)
    }

    /// Runs a full check using `probe` for the requests.
    ///
    /// Same pipeline as `run_check`, with the HTTP layer supplied by the
    /// caller.
    pub async fn run_check_with_probe<P: StatusProbe>(
        config: Config,
        probe: Arc<P>,
    ) -> Result<CheckReport> {
        let domains = read_domains(&config.file).await?;
        let total_domains = domains.len();
        info!(
            "Checking {} domains from {} (up to {} concurrent requests)",
            total_domains,
            config.file.display(),
            config.max_concurrency
        );

        let start_time = Instant::now();
        let completed = Arc::new(AtomicUsize::new(0));
        let cancel = CancellationToken::new();
        let logging_task = spawn_progress_logger(
            start_time,
            Arc::clone(&completed),
            total_domains,
            Duration::from_secs(LOGGING_INTERVAL),
            cancel.child_token(),
        );

        let mut responded = 0usize;
        let mut failed = 0usize;
        let results = dispatch(probe, domains, config.max_concurrency, |url, outcome| {
            completed.fetch_add(1, Ordering::SeqCst);
            if outcome.is_status() {
                responded += 1;
            } else {
                failed += 1;
            }
            println!("{}", format_progress_line(url, outcome));
        })
        .await;

        shutdown_gracefully(cancel, Some(logging_task)).await;
        log_progress(start_time, &completed, total_domains);

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_summary(total_domains, responded, failed, elapsed_seconds);

        if let Some(path) = &config.output {
            write_results(path, &results)?;
        }

        Ok(CheckReport {
            total_domains,
            responded,
            failed,
            elapsed_seconds,
            output: config.output,
            results,
        })
    }
}
