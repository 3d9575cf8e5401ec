use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::AdminId;
use crate::modules::contact::application::domain::entities::ContactInbox;
use crate::modules::portfolio::application::domain::entities::PortfolioDocument;
use crate::modules::project::application::domain::entities::Project;
use crate::shared::events::Collection;

/// Which collections a live session may watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Public,
    Admin,
}

impl Scope {
    pub fn for_session(session: Option<AdminId>) -> Self {
        match session {
            Some(_) => Scope::Admin,
            None => Scope::Public,
        }
    }

    pub fn collections(&self) -> &'static [Collection] {
        match self {
            Scope::Public => &[Collection::Projects, Collection::Portfolio],
            Scope::Admin => &[
                Collection::Projects,
                Collection::Portfolio,
                Collection::ContactSubmissions,
            ],
        }
    }

    pub fn includes(&self, collection: Collection) -> bool {
        self.collections().contains(&collection)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProviderState {
    Loading,
    Authenticating,
    Subscribed,
    Error,
}

/// Full contents of one collection at the time it was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Snapshot {
    Portfolio(PortfolioDocument),
    Projects(Vec<Project>),
    ContactSubmissions(ContactInbox),
}

impl Snapshot {
    pub fn collection(&self) -> Collection {
        match self {
            Snapshot::Portfolio(_) => Collection::Portfolio,
            Snapshot::Projects(_) => Collection::Projects,
            Snapshot::ContactSubmissions(_) => Collection::ContactSubmissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent {
    State(ProviderState),
    Snapshot(Snapshot),
    KeepAlive,
}

impl LiveEvent {
    /// `text/event-stream` framing. Snapshots are named after their
    /// collection.
    pub fn to_sse(&self) -> String {
        match self {
            LiveEvent::State(state) => frame("state", serde_json::to_string(state)),
            LiveEvent::Snapshot(snapshot) => frame(
                snapshot.collection().as_str(),
                serde_json::to_string(snapshot),
            ),
            LiveEvent::KeepAlive => ": keep-alive\n\n".to_string(),
        }
    }
}

fn frame(event: &str, data: serde_json::Result<String>) -> String {
    match data {
        Ok(json) => format!("event: {event}\ndata: {json}\n\n"),
        Err(e) => {
            tracing::error!(%event, "Failed to serialize live event: {}", e);
            format!(": dropped {event} event\n\n")
        }
    }
}
