use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait DeleteProjectUseCase: Send + Sync {
    fn execute(&self, id: Uuid) -> ActionResult;
}

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Clone + 'static,
{
    fn execute(&self, id: Uuid) -> ActionResult {
        let repository = self.repository.clone();
        self.writes
            .dispatch(Collection::Projects, "delete_project", async move {
                repository.delete(id).await.map_err(StoreFailure::from)
            });

        ActionResult::accepted_with_id("Project deleted", id.to_string())
    }
}
