use tokio::sync::broadcast;

use super::Collection;

const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotice {
    pub collection: Collection,
}

/// Process-wide "something was written" signal. Carries no payload; listeners
/// re-read the collection they care about.
#[derive(Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ChangeNotice>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, collection: Collection) {
        // No live subscriber is a normal state
        let _ = self.tx.send(ChangeNotice { collection });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeNotice> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_every_subscriber() {
        let feed = ChangeFeed::default();
        let mut a = feed.subscribe();
        let mut b = feed.subscribe();

        feed.publish(Collection::Projects);

        assert_eq!(a.recv().await.unwrap().collection, Collection::Projects);
        assert_eq!(b.recv().await.unwrap().collection, Collection::Projects);
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        let feed = ChangeFeed::default();
        feed.publish(Collection::Portfolio);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn dropped_receiver_unregisters() {
        let feed = ChangeFeed::default();
        let rx = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 1);
        drop(rx);
        assert_eq!(feed.subscriber_count(), 0);
    }
}
