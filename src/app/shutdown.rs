//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Shuts down background tasks once the batch is finished.
///
/// Cancels the progress logger and waits for it to exit.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    logging_task: Option<tokio::task::JoinHandle<()>>,
) {
    cancel.cancel();
    if let Some(logging_task) = logging_task {
        if let Err(e) = logging_task.await {
            log::warn!("Progress logger ended abnormally: {}", e);
        }
    }
}
