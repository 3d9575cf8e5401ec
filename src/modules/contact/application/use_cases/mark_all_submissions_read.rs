use tracing::debug;

use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

/// Marks every unread submission read. Running it again with nothing unread
/// is a successful no-op.
pub trait MarkAllSubmissionsReadUseCase: Send + Sync {
    fn execute(&self) -> ActionResult;
}

pub struct MarkAllSubmissionsReadService<R>
where
    R: ContactRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> MarkAllSubmissionsReadService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> MarkAllSubmissionsReadUseCase for MarkAllSubmissionsReadService<R>
where
    R: ContactRepository + Clone + 'static,
{
    fn execute(&self) -> ActionResult {
        let repository = self.repository.clone();

        self.writes.dispatch(
            Collection::ContactSubmissions,
            "mark_all_submissions_read",
            async move {
                let updated = repository.mark_all_read().await.map_err(StoreFailure::from)?;
                debug!(updated, "Marked submissions read");
                Ok::<(), StoreFailure>(())
            },
        );

        ActionResult::accepted("All messages marked as read")
    }
}
