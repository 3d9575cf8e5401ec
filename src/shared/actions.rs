//! Fire-and-forget writes.
//!
//! An action validates synchronously, hands the store write to a spawned task and
//! answers optimistically. The outcome of the write only shows up on the
//! [`ChangeFeed`] (success) or the [`ErrorEmitter`] (failure).

use std::future::Future;

use actix_web::HttpResponse;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::shared::events::{ChangeFeed, Collection, ErrorEmitter, StoreErrorEvent, StoreErrorKind};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ActionResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    pub fn accepted_with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }

    /// 202 with the result as data, or 400 `VALIDATION_ERROR`.
    pub fn into_response(self) -> HttpResponse {
        if self.success {
            ApiResponse::accepted(self)
        } else {
            ApiResponse::invalid(self.message)
        }
    }
}

impl From<ValidationError> for ActionResult {
    fn from(err: ValidationError) -> Self {
        ActionResult::rejected(err.to_string())
    }
}

/// A failed store write, already classified for the error channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct StoreFailure {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl StoreFailure {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotFound, message)
    }

    /// Classify a raw database error message.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        let kind = if lower.contains("permission denied")
            || lower.contains("insufficient privilege")
            || lower.contains("42501")
        {
            StoreErrorKind::PermissionDenied
        } else if lower.contains("connection")
            || lower.contains("timed out")
            || lower.contains("timeout")
            || lower.contains("pool")
        {
            StoreErrorKind::Unavailable
        } else if lower.contains("not found") || lower.contains("no rows") {
            StoreErrorKind::NotFound
        } else {
            StoreErrorKind::Invalid
        };

        Self { kind, message }
    }
}

#[derive(Clone)]
pub struct WriteDispatcher {
    feed: ChangeFeed,
    errors: ErrorEmitter,
}

impl WriteDispatcher {
    pub fn new(feed: ChangeFeed, errors: ErrorEmitter) -> Self {
        Self { feed, errors }
    }

    /// Runs `write` on its own task. Callers normally drop the handle; tests
    /// await it to observe completion.
    pub fn dispatch<F>(
        &self,
        collection: Collection,
        operation: impl Into<String>,
        write: F,
    ) -> JoinHandle<()>
    where
        F: Future<Output = Result<(), StoreFailure>> + Send + 'static,
    {
        let feed = self.feed.clone();
        let errors = self.errors.clone();
        let operation = operation.into();

        tokio::spawn(async move {
            match write.await {
                Ok(()) => {
                    debug!(%collection, %operation, "store write committed");
                    feed.publish(collection);
                }
                Err(failure) => {
                    warn!(%collection, %operation, "store write failed: {}", failure);
                    errors.emit(StoreErrorEvent::new(
                        collection,
                        operation,
                        failure.kind,
                        failure.message,
                    ));
                }
            }
        })
    }
}
