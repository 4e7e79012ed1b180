//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Logs progress information about the running batch.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Atomic counter of finished checks
/// * `total` - Number of domains in the batch
pub fn log_progress(start_time: std::time::Instant, completed: &Arc<AtomicUsize>, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        completed, total, elapsed_secs, rate
    );
}

/// Spawns a task that calls `log_progress` every `interval` until `cancel` fires.
pub fn spawn_progress_logger(
    start_time: std::time::Instant,
    completed: Arc<AtomicUsize>,
    total: usize,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    log_progress(start_time, &completed, total);
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }
    })
}
