//! Graceful shutdown handling.

use log::warn;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// The in-flight scan observes the token and returns `ScanError::Cancelled`;
/// the exporter then flushes what it has already written.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    warn!("Interrupt received, cancelling scan");
                    cancel.cancel();
                }
            }
        }
    })
}

/// Stops the signal watcher once the export has finished.
pub async fn shutdown_gracefully(cancel: CancellationToken, signal_task: JoinHandle<()>) {
    cancel.cancel();
    let _ = signal_task.await;
}
