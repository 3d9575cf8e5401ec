//! Owns at most one live subscription at a time and swaps it when the
//! session changes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::modules::auth::application::domain::entities::AdminId;
use crate::modules::realtime::application::domain::entities::{LiveEvent, ProviderState, Scope};
use crate::modules::realtime::application::ports::outgoing::SnapshotSource;
use crate::modules::realtime::application::subscription::{
    transition, Subscription, SubscriptionContext,
};
use crate::shared::events::{ChangeFeed, ErrorEmitter};

const EVENT_BUFFER: usize = 64;

pub struct SubscriptionProvider {
    ctx: SubscriptionContext,
    current: Option<Subscription>,
    opened: usize,
    teardowns: Arc<AtomicUsize>,
}

impl SubscriptionProvider {
    /// Starts in `loading` with nothing subscribed. Events for the returned
    /// receiver begin with the first [`on_auth_change`](Self::on_auth_change).
    pub fn mount(
        source: Arc<dyn SnapshotSource>,
        feed: ChangeFeed,
        errors: ErrorEmitter,
    ) -> (Self, mpsc::Receiver<LiveEvent>) {
        let (events, rx) = mpsc::channel(EVENT_BUFFER);
        let (state, _) = watch::channel(ProviderState::Loading);

        let provider = Self {
            ctx: SubscriptionContext {
                source,
                feed,
                errors,
                events,
                state: Arc::new(state),
            },
            current: None,
            opened: 0,
            teardowns: Arc::new(AtomicUsize::new(0)),
        };

        (provider, rx)
    }

    /// Replaces the current subscription with one scoped to `session`.
    pub fn on_auth_change(&mut self, session: Option<AdminId>) {
        transition(&self.ctx.state, &self.ctx.events, ProviderState::Authenticating);

        if let Some(mut previous) = self.current.take() {
            previous.teardown();
        }

        let scope = Scope::for_session(session);
        transition(&self.ctx.state, &self.ctx.events, ProviderState::Subscribed);
        self.current = Some(Subscription::open(
            scope,
            self.ctx.clone(),
            Arc::clone(&self.teardowns),
        ));
        self.opened += 1;
    }

    pub fn unmount(&mut self) {
        if let Some(mut current) = self.current.take() {
            current.teardown();
        }
    }

    pub fn state(&self) -> ProviderState {
        *self.ctx.state.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<ProviderState> {
        self.ctx.state.subscribe()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.current.as_ref().map(Subscription::scope)
    }

    pub fn opened_count(&self) -> usize {
        self.opened
    }

    pub fn teardown_count(&self) -> usize {
        self.teardowns.load(Ordering::SeqCst)
    }
}

impl Drop for SubscriptionProvider {
    fn drop(&mut self) {
        self.unmount();
    }
}
