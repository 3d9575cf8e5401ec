use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{Admin, NewAdmin};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("email already registered")]
    EmailAlreadyExists,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;
}
