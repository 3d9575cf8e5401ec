use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ProjectDraft, ProjectInput};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait CreateProjectUseCase: Send + Sync {
    fn execute(&self, input: ProjectInput) -> ActionResult;
}

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Clone + 'static,
{
    fn execute(&self, input: ProjectInput) -> ActionResult {
        let draft = match ProjectDraft::new(input) {
            Ok(draft) => draft,
            Err(e) => return e.into(),
        };

        let id = Uuid::new_v4();
        let repository = self.repository.clone();

        self.writes
            .dispatch(Collection::Projects, "create_project", async move {
                repository.create(id, draft).await.map_err(StoreFailure::from)
            });

        ActionResult::accepted_with_id("Project created", id.to_string())
    }
}
