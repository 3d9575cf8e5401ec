use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectDraft;
use crate::shared::actions::StoreFailure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ProjectRepositoryError> for StoreFailure {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => StoreFailure::not_found("project not found"),
            ProjectRepositoryError::DatabaseError(msg) => StoreFailure::classify(msg),
        }
    }
}

/// Write side of the `projects` collection.
///
/// Ids are chosen by the caller so an accepted create can report the id
/// before the row exists.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, id: Uuid, draft: ProjectDraft) -> Result<(), ProjectRepositoryError>;

    /// Replaces every editable field. `NotFound` when no row has `id`.
    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<(), ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
