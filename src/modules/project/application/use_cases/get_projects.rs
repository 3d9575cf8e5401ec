use async_trait::async_trait;
use tracing::warn;

use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// Never fails: an unreadable store yields the bundled projects.
    async fn execute(&self) -> Vec<Project>;
}

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self) -> Vec<Project> {
        self.query.list().await.unwrap_or_else(|e| {
            warn!("Projects unreadable, serving defaults: {}", e);
            bundled_defaults().projects.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::tests::support::memory_store::{sample_project, InMemoryProjects};

    #[tokio::test]
    async fn lists_newest_first() {
        let older = sample_project("Older");
        let mut newer = sample_project("Newer");
        newer.created_at = older.created_at + Duration::minutes(5);
        let service = GetProjectsService::new(InMemoryProjects::with(vec![older, newer]));

        let titles: Vec<_> = service
            .execute()
            .await
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, ["Newer", "Older"]);
    }

    #[tokio::test]
    async fn query_failure_serves_bundled_projects() {
        let service = GetProjectsService::new(InMemoryProjects::failing("connection refused"));

        assert_eq!(service.execute().await, bundled_defaults().projects);
    }

    #[tokio::test]
    async fn empty_store_is_not_replaced_by_defaults() {
        let service = GetProjectsService::new(InMemoryProjects::default());
        assert!(service.execute().await.is_empty());
    }
}
