//! Cross-view change signaling.
//!
//! Views never talk to each other directly. After a successful mutation
//! the mutating surface publishes a change event on the shared bus; every
//! subscribed surface re-fetches from the repository, so storage stays the
//! single source of truth. Delivery is asynchronous over a broadcast
//! channel rather than a synchronous listener registry, which keeps a slow
//! subscriber from stalling the publisher.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default broadcast capacity. Slow subscribers that fall further behind
/// than this observe a lag and must re-fetch.
pub const DEFAULT_BUS_CAPACITY: usize = 64;

/// A change to the observation collection.
///
/// There is deliberately one coarse variant with no payload: subscribers
/// converge by re-reading storage, never by patching their own state from
/// event data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// The persisted collection changed in some way; re-fetch to see how.
    CollectionChanged,
}

impl ChangeEvent {
    /// Stable topic name for logs and external listeners.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::CollectionChanged => "observations:changed",
        }
    }
}

/// Broadcast bus carrying [`ChangeEvent`]s between views.
///
/// Cloning is cheap; every surface in a process shares one bus. Publishing
/// with zero subscribers is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// Create a bus with the specified channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create a bus with default capacity.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_BUS_CAPACITY)
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: ChangeEvent) {
        // Ignore send errors (no subscribers is fine)
        let _ = self.sender.send(event);
    }

    /// Subscribe to events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_stable() {
        // External listeners key on these strings; changing one is a break.
        assert_eq!(
            ChangeEvent::CollectionChanged.event_name(),
            "observations:changed"
        );
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let json = serde_json::to_string(&ChangeEvent::CollectionChanged).unwrap();
        assert_eq!(json, r#"{"type":"collection_changed"}"#);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_noop() {
        let bus = ChangeBus::with_defaults();
        assert_eq!(bus.subscriber_count(), 0);

        // Must not panic or error
        bus.publish(ChangeEvent::CollectionChanged);
    }

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = ChangeBus::with_defaults();
        let mut receiver = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        bus.publish(ChangeEvent::CollectionChanged);

        let event = receiver.recv().await.unwrap();
        assert_eq!(event, ChangeEvent::CollectionChanged);
    }

    #[tokio::test]
    async fn every_subscriber_sees_every_event() {
        let bus = ChangeBus::with_defaults();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(ChangeEvent::CollectionChanged);
        bus.publish(ChangeEvent::CollectionChanged);

        for receiver in [&mut first, &mut second] {
            assert_eq!(receiver.recv().await.unwrap(), ChangeEvent::CollectionChanged);
            assert_eq!(receiver.recv().await.unwrap(), ChangeEvent::CollectionChanged);
        }
    }

    #[tokio::test]
    async fn subscription_starts_at_the_present() {
        let bus = ChangeBus::with_defaults();
        bus.publish(ChangeEvent::CollectionChanged);

        // Subscribed after the publish: nothing pending.
        let mut receiver = bus.subscribe();
        assert!(matches!(
            receiver.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
