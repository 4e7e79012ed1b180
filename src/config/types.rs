//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_USER_AGENT, LOG_FORMAT_ENV, MAX_CONCURRENCY, REQUEST_TIMEOUT_SECS,
};

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl LogFormat {
    /// Reads the log format from `DOMAIN_CHECK_LOG_FORMAT`.
    ///
    /// Unset or unrecognized values fall back to `Plain`.
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or(LogFormat::Plain)
    }

    fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print results only
/// domain_check -f domains.txt
///
/// # Also save them to a file
/// domain_check --file domains.txt --output results.txt
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_check",
    about = "Send HTTP requests to multiple domains and retrieve status codes."
)]
pub struct Opt {
    /// Path to the file containing domains (one per line).
    #[arg(short = 'f', long = "file", value_parser)]
    pub file: PathBuf,

    /// Path to the output file to save results.
    #[arg(short = 'o', long = "output", value_parser)]
    pub output: Option<PathBuf>,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use domain_check::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     output: Some(PathBuf::from("results.txt")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read domains from
    pub file: PathBuf,

    /// Optional results file (created or truncated)
    pub output: Option<PathBuf>,

    /// Maximum requests in flight
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            output: None,
            max_concurrency: MAX_CONCURRENCY,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            output: opt.output,
            ..Default::default()
        }
    }
}
