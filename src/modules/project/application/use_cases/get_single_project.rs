use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Project, GetSingleProjectError>;
}

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, id: Uuid) -> Result<Project, GetSingleProjectError> {
        let found = match self.query.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                warn!("Project {} unreadable, searching defaults: {}", id, e);
                bundled_defaults()
                    .projects
                    .iter()
                    .find(|p| p.id == id)
                    .cloned()
            }
        };

        found.ok_or(GetSingleProjectError::NotFound)
    }
}
