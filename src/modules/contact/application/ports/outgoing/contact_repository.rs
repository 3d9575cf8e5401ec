use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::shared::actions::StoreFailure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Submission not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ContactRepositoryError> for StoreFailure {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::NotFound => StoreFailure::not_found("submission not found"),
            ContactRepositoryError::DatabaseError(msg) => StoreFailure::classify(msg),
        }
    }
}

/// Write side of the `contact_submissions` collection.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, submission: ContactSubmission) -> Result<(), ContactRepositoryError>;

    /// `NotFound` when no row has `id`. Marking an already-read row is fine.
    async fn mark_read(&self, id: Uuid) -> Result<(), ContactRepositoryError>;

    /// Marks every unread row read in one statement and returns how many
    /// changed. Zero is a valid outcome.
    async fn mark_all_read(&self) -> Result<u64, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
