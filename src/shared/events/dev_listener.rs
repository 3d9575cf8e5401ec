use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use super::ErrorEmitter;

/// Development overlay: prints every store error event until the emitter is
/// dropped.
pub fn spawn_dev_listener(emitter: &ErrorEmitter) -> JoinHandle<()> {
    let mut rx = emitter.subscribe();

    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => error!(
                    collection = %event.collection,
                    operation = %event.operation,
                    kind = ?event.kind,
                    occurred_at = %event.occurred_at,
                    "store error: {}",
                    event.message
                ),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("dev error listener lagged, {} events skipped", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
