use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::shared::actions::StoreFailure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ContactQueryError> for StoreFailure {
    fn from(err: ContactQueryError) -> Self {
        match err {
            ContactQueryError::DatabaseError(msg) => StoreFailure::classify(msg),
        }
    }
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Every submission, newest first.
    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactQueryError>;

    async fn unread_count(&self) -> Result<u64, ContactQueryError>;
}
