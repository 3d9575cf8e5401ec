use std::time::Duration;
use tokio::sync::broadcast;

use crate::shared::actions::WriteDispatcher;
use crate::shared::events::{ChangeFeed, ChangeNotice, ErrorEmitter, StoreErrorEvent};

const WAIT: Duration = Duration::from_secs(2);

/// A dispatcher plus the two channels it reports to.
pub fn test_dispatcher() -> (WriteDispatcher, ChangeFeed, ErrorEmitter) {
    let feed = ChangeFeed::default();
    let errors = ErrorEmitter::default();
    (WriteDispatcher::new(feed.clone(), errors.clone()), feed, errors)
}

pub async fn expect_notice(rx: &mut broadcast::Receiver<ChangeNotice>) -> ChangeNotice {
    tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("no change notice in time")
        .expect("change feed closed")
}

pub async fn expect_error(rx: &mut broadcast::Receiver<StoreErrorEvent>) -> StoreErrorEvent {
    tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("no store error in time")
        .expect("error emitter closed")
}
