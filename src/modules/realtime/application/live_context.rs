use std::sync::Arc;

use crate::modules::realtime::application::ports::outgoing::SnapshotSource;
use crate::shared::events::{ChangeFeed, ErrorEmitter};

/// Shared pieces every live connection mounts its provider with.
#[derive(Clone)]
pub struct LiveContext {
    pub source: Arc<dyn SnapshotSource>,
    pub feed: ChangeFeed,
    pub errors: ErrorEmitter,
}
