use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactInbox;
use crate::modules::contact::application::ports::outgoing::ContactQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubmissionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListSubmissionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactInbox, ListSubmissionsError>;
}

pub struct ListSubmissionsService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> ListSubmissionsService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSubmissionsUseCase for ListSubmissionsService<Q>
where
    Q: ContactQuery,
{
    async fn execute(&self) -> Result<ContactInbox, ListSubmissionsError> {
        let (items, unread_count) = tokio::join!(self.query.list(), self.query.unread_count());

        Ok(ContactInbox {
            items: items.map_err(|e| ListSubmissionsError::QueryError(e.to_string()))?,
            unread_count: unread_count
                .map_err(|e| ListSubmissionsError::QueryError(e.to_string()))?,
        })
    }
}
