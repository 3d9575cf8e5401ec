use crate::modules::portfolio::application::domain::entities::{PortfolioPatch, SiteSettings};
use crate::modules::portfolio::application::domain::forms::SettingsInput;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

pub trait UpdateSettingsUseCase: Send + Sync {
    fn execute(&self, input: SettingsInput) -> ActionResult;
}

pub struct UpdateSettingsService<R>
where
    R: PortfolioRepository,
{
    repository: R,
    writes: WriteDispatcher,
}

impl<R> UpdateSettingsService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R, writes: WriteDispatcher) -> Self {
        Self { repository, writes }
    }
}

impl<R> UpdateSettingsUseCase for UpdateSettingsService<R>
where
    R: PortfolioRepository + Clone + 'static,
{
    fn execute(&self, input: SettingsInput) -> ActionResult {
        let settings = match SiteSettings::new(input) {
            Ok(settings) => settings,
            Err(e) => return e.into(),
        };

        let repository = self.repository.clone();
        self.writes
            .dispatch(Collection::Portfolio, "update_settings", async move {
                let patch = PortfolioPatch {
                    settings: Some(settings),
                    ..Default::default()
                };
                repository.merge(patch).await.map_err(StoreFailure::from)
            });

        ActionResult::accepted("Settings updated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::events::{expect_notice, test_dispatcher};
    use crate::tests::support::memory_store::InMemoryPortfolio;

    fn input() -> SettingsInput {
        SettingsInput {
            site_title: "  Jordan Lee  ".to_string(),
            site_description: "Portfolio".to_string(),
            contact_form_enabled: false,
            maintenance_mode: false,
        }
    }

    #[tokio::test]
    async fn first_write_creates_document_from_defaults() {
        let (writes, feed, _) = test_dispatcher();
        let mut notices = feed.subscribe();
        let store = InMemoryPortfolio::default();
        let service = UpdateSettingsService::new(store.clone(), writes);

        assert!(service.execute(input()).success);
        expect_notice(&mut notices).await;

        let stored = store.snapshot().unwrap();
        assert_eq!(stored.settings.site_title, "Jordan Lee");
        assert!(!stored.settings.contact_form_enabled);
    }

    #[tokio::test]
    async fn short_title_is_rejected() {
        let (writes, _, _) = test_dispatcher();
        let service = UpdateSettingsService::new(InMemoryPortfolio::default(), writes);

        let mut input = input();
        input.site_title = "J".to_string();

        assert_eq!(
            service.execute(input),
            ActionResult::rejected("siteTitle: must be at least 2 characters")
        );
    }
}
