use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AdminId, AdminProfile};
use crate::modules::auth::application::ports::outgoing::AdminQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CurrentAdminError {
    #[error("Admin account no longer exists")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait CurrentAdminUseCase: Send + Sync {
    async fn execute(&self, admin_id: AdminId) -> Result<AdminProfile, CurrentAdminError>;
}

pub struct CurrentAdminService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> CurrentAdminService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CurrentAdminUseCase for CurrentAdminService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self, admin_id: AdminId) -> Result<AdminProfile, CurrentAdminError> {
        self.query
            .find_by_id(admin_id)
            .await
            .map_err(|e| CurrentAdminError::QueryError(e.to_string()))?
            .map(|admin| AdminProfile::from(&admin))
            .ok_or(CurrentAdminError::NotFound)
    }
}
