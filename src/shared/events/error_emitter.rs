use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use utoipa::ToSchema;

use super::Collection;

const DEFAULT_CAPACITY: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    PermissionDenied,
    NotFound,
    Unavailable,
    Invalid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreErrorEvent {
    pub collection: Collection,
    pub operation: String,
    pub kind: StoreErrorKind,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl StoreErrorEvent {
    pub fn new(
        collection: Collection,
        operation: impl Into<String>,
        kind: StoreErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            operation: operation.into(),
            kind,
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Global channel for store failures that happen after the caller moved on:
/// background writes and live snapshot reads.
#[derive(Clone)]
pub struct ErrorEmitter {
    tx: broadcast::Sender<StoreErrorEvent>,
}

impl ErrorEmitter {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Returns how many listeners received the event. Zero is not an error.
    pub fn emit(&self, event: StoreErrorEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreErrorEvent> {
        self.tx.subscribe()
    }
}

impl Default for ErrorEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
