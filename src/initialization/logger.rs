//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use colored::*;
use env_logger::Env;
use log::LevelFilter;

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The level comes from the `RUST_LOG` environment variable and defaults to
/// `warn`, so a normal run leaves stderr quiet and stdout carries only the
/// result lines. Log output always goes to stderr.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show run progress and summary
/// RUST_LOG=info domain_check -f domains.txt
///
/// # Per-request debugging as JSON lines
/// RUST_LOG=domain_check=debug DOMAIN_CHECK_LOG_FORMAT=json domain_check -f domains.txt
/// ```
pub fn init_logger_with(format: LogFormat) -> Result<(), InitializationError> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));

    builder.filter_module("reqwest", LevelFilter::Warn);
    builder.filter_module("hyper", LevelFilter::Warn);
    builder.filter_module("hyper_util", LevelFilter::Warn);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init: tests may initialize more than once per process
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_reports_error() {
        // Whichever call comes first may win; the second must fail without panicking
        let _ = init_logger_with(LogFormat::Plain);
        let result = init_logger_with(LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
