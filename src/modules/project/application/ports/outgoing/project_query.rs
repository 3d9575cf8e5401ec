use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::shared::actions::StoreFailure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ProjectQueryError> for StoreFailure {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => StoreFailure::classify(msg),
        }
    }
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project, newest first.
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectQueryError>;
}
