use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactInbox;
use crate::modules::contact::application::ports::outgoing::ContactQuery;
use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::realtime::application::domain::entities::Snapshot;
use crate::modules::realtime::application::ports::outgoing::SnapshotSource;
use crate::shared::actions::StoreFailure;
use crate::shared::events::Collection;

/// Reads snapshots straight from the repositories that back each collection.
pub struct StoreSnapshotSource<P, Q, C>
where
    P: PortfolioRepository,
    Q: ProjectQuery,
    C: ContactQuery,
{
    portfolio: P,
    projects: Q,
    contacts: C,
}

impl<P, Q, C> StoreSnapshotSource<P, Q, C>
where
    P: PortfolioRepository,
    Q: ProjectQuery,
    C: ContactQuery,
{
    pub fn new(portfolio: P, projects: Q, contacts: C) -> Self {
        Self {
            portfolio,
            projects,
            contacts,
        }
    }
}

#[async_trait]
impl<P, Q, C> SnapshotSource for StoreSnapshotSource<P, Q, C>
where
    P: PortfolioRepository,
    Q: ProjectQuery,
    C: ContactQuery,
{
    async fn read(&self, collection: Collection) -> Result<Snapshot, StoreFailure> {
        match collection {
            Collection::Portfolio => {
                let document = self
                    .portfolio
                    .load()
                    .await?
                    .unwrap_or_else(|| bundled_defaults().document.clone());
                Ok(Snapshot::Portfolio(document))
            }
            Collection::Projects => Ok(Snapshot::Projects(self.projects.list().await?)),
            Collection::ContactSubmissions => {
                let (items, unread) =
                    tokio::join!(self.contacts.list(), self.contacts.unread_count());
                Ok(Snapshot::ContactSubmissions(ContactInbox {
                    items: items?,
                    unread_count: unread?,
                }))
            }
        }
    }
}
