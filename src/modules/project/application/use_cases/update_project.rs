use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ProjectDraft, ProjectInput};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait UpdateProjectUseCase: Send + Sync {
    fn execute(&self, id: Uuid, input: ProjectInput) -> ActionResult;
}

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Clone + 'static,
{
    fn execute(&self, id: Uuid, input: ProjectInput) -> ActionResult {
        let draft = match ProjectDraft::new(input) {
            Ok(draft) => draft,
            Err(e) => return e.into(),
        };

        let repository = self.repository.clone();
        self.writes
            .dispatch(Collection::Projects, "update_project", async move {
                repository.update(id, draft).await.map_err(StoreFailure::from)
            });

        ActionResult::accepted_with_id("Project updated", id.to_string())
    }
}
