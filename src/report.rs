//! Result reporting: per-completion stdout lines and the results file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::dispatch::CheckResults;
use crate::error_handling::OutputError;
use crate::fetch::Outcome;

/// Formats the line printed when a check completes.
///
/// ```
/// use domain_check::{format_progress_line, Outcome};
///
/// assert_eq!(
///     format_progress_line("https://example.com", &Outcome::Status(200)),
///     "Domain: https://example.com | Status: 200"
/// );
/// ```
pub fn format_progress_line(url: &str, outcome: &Outcome) -> String {
    format!("Domain: {} | Status: {}", url, outcome)
}

/// Formats one line of the results file (without the trailing newline).
pub fn format_result_line(url: &str, outcome: &Outcome) -> String {
    format!("{}: {}", url, outcome)
}

/// Writes all results to `path`, one `<url>: <outcome>` line each.
///
/// The file is created or truncated. Lines follow the iteration order of
/// `results`.
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be created or written. The
/// file may hold partial content in that case.
pub fn write_results(path: &Path, results: &CheckResults) -> Result<(), OutputError> {
    let write_error = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for (url, outcome) in results {
        writeln!(writer, "{}", format_result_line(url, outcome)).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}
