use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait DeleteSubmissionUseCase: Send + Sync {
    fn execute(&self, id: Uuid) -> ActionResult;
}

pub struct DeleteSubmissionService<R>
where
    R: ContactRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> DeleteSubmissionService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> DeleteSubmissionUseCase for DeleteSubmissionService<R>
where
    R: ContactRepository + Clone + 'static,
{
    fn execute(&self, id: Uuid) -> ActionResult {
        let repository = self.repository.clone();

        self.writes
            .dispatch(Collection::ContactSubmissions, "delete_submission", async move {
                repository.delete(id).await.map_err(StoreFailure::from)
            });

        ActionResult::accepted_with_id("Message deleted", id.to_string())
    }
}
