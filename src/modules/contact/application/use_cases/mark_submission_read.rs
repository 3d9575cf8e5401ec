use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait MarkSubmissionReadUseCase: Send + Sync {
    fn execute(&self, id: Uuid) -> ActionResult;
}

pub struct MarkSubmissionReadService<R>
where
    R: ContactRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> MarkSubmissionReadService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> MarkSubmissionReadUseCase for MarkSubmissionReadService<R>
where
    R: ContactRepository + Clone + 'static,
{
    fn execute(&self, id: Uuid) -> ActionResult {
        let repository = self.repository.clone();

        self.writes
            .dispatch(Collection::ContactSubmissions, "mark_submission_read", async move {
                repository.mark_read(id).await.map_err(StoreFailure::from)
            });

        ActionResult::accepted_with_id("Message marked as read", id.to_string())
    }
}
