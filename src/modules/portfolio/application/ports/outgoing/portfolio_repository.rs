use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{PortfolioDocument, PortfolioPatch};
use crate::shared::actions::StoreFailure;
use crate::shared::events::StoreErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored portfolio is malformed: {0}")]
    MalformedDocument(String),
}

impl From<PortfolioRepositoryError> for StoreFailure {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::DatabaseError(msg) => StoreFailure::classify(msg),
            e @ PortfolioRepositoryError::MalformedDocument(_) => {
                StoreFailure::new(StoreErrorKind::Invalid, e.to_string())
            }
        }
    }
}

/// The singleton portfolio document.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// `None` until the first write.
    async fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioRepositoryError>;

    /// Overwrites the sections present in `patch`, creating the document from
    /// bundled defaults when it does not exist yet. Last write wins.
    async fn merge(&self, patch: PortfolioPatch) -> Result<(), PortfolioRepositoryError>;
}
