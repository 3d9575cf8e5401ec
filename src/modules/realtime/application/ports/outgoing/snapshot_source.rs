use async_trait::async_trait;

use crate::modules::realtime::application::domain::entities::Snapshot;
use crate::shared::actions::StoreFailure;
use crate::shared::events::Collection;

/// Reads a whole collection for a live subscription.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn read(&self, collection: Collection) -> Result<Snapshot, StoreFailure>;
}
