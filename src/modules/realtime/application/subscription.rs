//! One live subscription: a task that streams snapshots of the collections in
//! its scope, re-reading a collection whenever the change feed names it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::modules::realtime::application::domain::entities::{
    LiveEvent, ProviderState, Scope,
};
use crate::modules::realtime::application::ports::outgoing::SnapshotSource;
use crate::shared::events::{ChangeFeed, ChangeNotice, Collection, ErrorEmitter, StoreErrorEvent};

const KEEP_ALIVE_EVERY: Duration = Duration::from_secs(15);

/// Everything a subscription task needs besides its scope.
#[derive(Clone)]
pub struct SubscriptionContext {
    pub source: Arc<dyn SnapshotSource>,
    pub feed: ChangeFeed,
    pub errors: ErrorEmitter,
    pub events: mpsc::Sender<LiveEvent>,
    pub state: Arc<watch::Sender<ProviderState>>,
}

/// Records `next` and announces it without waiting. When the buffer is full
/// the announcement is dropped and only `watch_state` sees the change.
pub(crate) fn transition(
    state: &watch::Sender<ProviderState>,
    events: &mpsc::Sender<LiveEvent>,
    next: ProviderState,
) {
    let previous = state.send_replace(next);
    if previous != next {
        let _ = events.try_send(LiveEvent::State(next));
    }
}

/// Task-side transition: waits for room so the client always hears it.
/// Returns `false` once nobody is listening.
async fn announce(ctx: &SubscriptionContext, next: ProviderState) -> bool {
    let previous = ctx.state.send_replace(next);
    previous == next || ctx.events.send(LiveEvent::State(next)).await.is_ok()
}

pub struct Subscription {
    scope: Scope,
    task: Option<JoinHandle<()>>,
    teardowns: Arc<AtomicUsize>,
}

impl Subscription {
    /// Registers on the change feed before returning, so no write made after
    /// `open` can be missed.
    pub fn open(scope: Scope, ctx: SubscriptionContext, teardowns: Arc<AtomicUsize>) -> Self {
        let notices = ctx.feed.subscribe();
        let task = tokio::spawn(run(scope, ctx, notices));

        Self {
            scope,
            task: Some(task),
            teardowns,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Stops the task. Only the first call has an effect.
    pub fn teardown(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                self.teardowns.fetch_add(1, Ordering::SeqCst);
                debug!(scope = ?self.scope, "live subscription torn down");
                true
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run(scope: Scope, ctx: SubscriptionContext, mut notices: broadcast::Receiver<ChangeNotice>) {
    for &collection in scope.collections() {
        if !push_snapshot(&ctx, collection).await {
            return;
        }
    }

    let mut keep_alive = tokio::time::interval(KEEP_ALIVE_EVERY);
    keep_alive.tick().await;

    loop {
        tokio::select! {
            notice = notices.recv() => match notice {
                Ok(ChangeNotice { collection }) if scope.includes(collection) => {
                    if !push_snapshot(&ctx, collection).await {
                        return;
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "live subscription lagged, re-reading everything");
                    for &collection in scope.collections() {
                        if !push_snapshot(&ctx, collection).await {
                            return;
                        }
                    }
                }
                Err(broadcast::error::RecvError::Closed) => return,
            },
            _ = keep_alive.tick() => {
                if ctx.events.send(LiveEvent::KeepAlive).await.is_err() {
                    return;
                }
            }
        }
    }
}

/// Reads and forwards one snapshot. Returns `false` once nobody is listening.
async fn push_snapshot(ctx: &SubscriptionContext, collection: Collection) -> bool {
    match ctx.source.read(collection).await {
        Ok(snapshot) => {
            let recovering = *ctx.state.borrow() == ProviderState::Error;
            if recovering && !announce(ctx, ProviderState::Subscribed).await {
                return false;
            }
            ctx.events.send(LiveEvent::Snapshot(snapshot)).await.is_ok()
        }
        Err(failure) => {
            warn!(%collection, "live snapshot read failed: {}", failure);
            ctx.errors.emit(StoreErrorEvent::new(
                collection,
                "snapshot",
                failure.kind,
                failure.message,
            ));
            announce(ctx, ProviderState::Error).await && !ctx.events.is_closed()
        }
    }
}
