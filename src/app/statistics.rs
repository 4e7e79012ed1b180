//! End-of-run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Logs a one-line summary of the run.
pub fn print_summary(total: usize, responded: usize, failed: usize, elapsed_seconds: f64) {
    info!(
        "✅ Checked {} domain{} ({} responded, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        responded,
        failed,
        elapsed_seconds
    );
}

/// Logs the non-zero error and info counters.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
