use async_trait::async_trait;
use tracing::warn;

use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::portfolio::application::domain::entities::PortfolioData;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

/// Best-effort read of everything the public site renders. Never fails: a part
/// that cannot be read is replaced by its bundled default.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioData;
}

pub struct GetPortfolioService<R, Q>
where
    R: PortfolioRepository,
    Q: ProjectQuery,
{
    repository: R,
    projects: Q,
}

impl<R, Q> GetPortfolioService<R, Q>
where
    R: PortfolioRepository,
    Q: ProjectQuery,
{
    pub fn new(repository: R, projects: Q) -> Self {
        Self {
            repository,
            projects,
        }
    }
}

#[async_trait]
impl<R, Q> GetPortfolioUseCase for GetPortfolioService<R, Q>
where
    R: PortfolioRepository,
    Q: ProjectQuery,
{
    async fn execute(&self) -> PortfolioData {
        let defaults = bundled_defaults();

        let (document, projects) = tokio::join!(self.repository.load(), self.projects.list());

        let document = match document {
            Ok(Some(document)) => document,
            Ok(None) => defaults.document.clone(),
            Err(e) => {
                warn!("Portfolio document unreadable, serving defaults: {}", e);
                defaults.document.clone()
            }
        };

        let projects = projects.unwrap_or_else(|e| {
            warn!("Projects unreadable, serving defaults: {}", e);
            defaults.projects.clone()
        });

        PortfolioData::assemble(document, projects)
    }
}
