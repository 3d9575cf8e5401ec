use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{Admin, AdminId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    /// `email` is expected lower-cased.
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminQueryError>;
    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, AdminQueryError>;
    async fn count(&self) -> Result<u64, AdminQueryError>;
}
