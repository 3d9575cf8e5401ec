use crate::modules::portfolio::application::domain::forms::{ProfileInput, ProfileUpdate};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait UpdateProfileUseCase: Send + Sync {
    fn execute(&self, input: ProfileInput) -> ActionResult;
}

pub struct UpdateProfileService<R>
where
    R: PortfolioRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> UpdateProfileService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: PortfolioRepository + Clone + 'static,
{
    fn execute(&self, input: ProfileInput) -> ActionResult {
        let update = match ProfileUpdate::new(input) {
            Ok(update) => update,
            Err(e) => return e.into(),
        };

        let repository = self.repository.clone();
        self.writes
            .dispatch(Collection::Portfolio, "update_profile", async move {
                repository
                    .merge(update.into_patch())
                    .await
                    .map_err(StoreFailure::from)
            });

        ActionResult::accepted("Profile updated")
    }
}
