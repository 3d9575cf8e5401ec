mod change_feed;
mod dev_listener;
mod error_emitter;

use serde::Serialize;
use utoipa::ToSchema;

pub use change_feed::{ChangeFeed, ChangeNotice};
pub use dev_listener::spawn_dev_listener;
pub use error_emitter::{ErrorEmitter, StoreErrorEvent, StoreErrorKind};

/// The independently observable parts of the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Portfolio,
    Projects,
    ContactSubmissions,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Portfolio => "portfolio",
            Collection::Projects => "projects",
            Collection::ContactSubmissions => "contact_submissions",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
