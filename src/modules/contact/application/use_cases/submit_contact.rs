use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactDraft, ContactInput};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::email::application::ports::outgoing::ContactNotifier;
use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::shared::actions::{ActionResult, StoreFailure, WriteDispatcher};
use crate::shared::events::Collection;

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// Whether the site currently accepts contact messages.
    async fn form_enabled(&self) -> bool;

    fn execute(&self, input: ContactInput) -> ActionResult;
}

pub struct SubmitContactService<R, P>
where
    R: ContactRepository,
    P: PortfolioRepository,
{
    repository: R,
    portfolio: P,
    notifier: Arc<dyn ContactNotifier>,
    writes: WriteDispatcher,
}

impl<R, P> SubmitContactService<R, P>
where
    R: ContactRepository,
    P: PortfolioRepository,
{
    pub fn new(
        repository: R,
        portfolio: P,
        notifier: Arc<dyn ContactNotifier>,
        writes: WriteDispatcher,
    ) -> Self {
        Self {
            repository,
            portfolio,
            notifier,
            writes,
        }
    }
}

#[async_trait]
impl<R, P> SubmitContactUseCase for SubmitContactService<R, P>
where
    R: ContactRepository + Clone + 'static,
    P: PortfolioRepository,
{
    async fn form_enabled(&self) -> bool {
        match self.portfolio.load().await {
            Ok(Some(document)) => document.settings.contact_form_enabled,
            Ok(None) => bundled_defaults().document.settings.contact_form_enabled,
            Err(e) => {
                warn!("Settings unreadable, using default contact form flag: {}", e);
                bundled_defaults().document.settings.contact_form_enabled
            }
        }
    }

    fn execute(&self, input: ContactInput) -> ActionResult {
        let draft = match ContactDraft::new(input) {
            Ok(draft) => draft,
            Err(e) => return e.into(),
        };

        let submission = draft.into_submission(Uuid::new_v4(), Utc::now());
        let repository = self.repository.clone();
        let notifier = Arc::clone(&self.notifier);

        self.writes
            .dispatch(Collection::ContactSubmissions, "submit_contact", async move {
                repository.insert(submission.clone()).await?;

                if let Err(e) = notifier.notify_new_submission(&submission).await {
                    warn!(submission_id = %submission.id, "Contact notification failed: {}", e);
                }
                Ok::<(), StoreFailure>(())
            });

        ActionResult::accepted("Message sent")
    }
}
