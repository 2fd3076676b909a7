use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

use heartsync_shared::types::event::Event;

use super::StoreEvent;

const SOURCE: &str = "heartsync-store";

/// Fans store events out to every subscriber.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    tx: broadcast::Sender<Event<StoreEvent>>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event<StoreEvent>> {
        self.tx.subscribe()
    }

    pub fn publish(&self, data: StoreEvent, user_id: Option<&str>, at: DateTime<Utc>) {
        let mut event = Event::new(SOURCE, data.routing_key(), data).with_timestamp(at);
        if let Some(id) = user_id {
            event = event.with_user(id);
        }

        // No subscribers is the normal case for a headless store.
        if self.tx.send(event).is_err() {
            tracing::trace!("store event dropped, no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_fine() {
        let publisher = EventPublisher::new(4);
        publisher.publish(StoreEvent::LoggedOut, None, Utc::now());
    }

    #[tokio::test]
    async fn subscribers_receive_envelopes() {
        let publisher = EventPublisher::new(4);
        let mut rx = publisher.subscribe();
        let at = Utc::now();

        publisher.publish(
            StoreEvent::MatchCreated {
                match_id: "match-1".into(),
                user_id: "1".into(),
            },
            Some("current-user"),
            at,
        );

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, "heartsync.swipe.match.created");
        assert_eq!(event.source, "heartsync-store");
        assert_eq!(event.user_id.as_deref(), Some("current-user"));
        assert_eq!(event.timestamp, at);
    }
}
