//! In-memory event bus: exactly matches the `EventBus` contract, no wire
//! transport. Used by tests and by any in-process deployment that does
//! not need cross-process delivery (Kafka/Redis are out of scope here).

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::warn;

use crate::bus::EventBus;
use crate::error::BusResult;
use crate::message::Message;
use crate::topic::topic_matches;

/// Bounded so a slow or dead subscriber cannot grow memory without limit;
/// publishing to a full or closed subscriber channel logs and drops the
/// message for that subscriber rather than blocking the publisher.
pub const DEFAULT_SUBSCRIBER_CAPACITY: usize = 256;

struct Subscriber {
    pattern: String,
    sender: mpsc::Sender<Message>,
}

pub struct InMemoryEventBus {
    subscribers: Mutex<Vec<Subscriber>>,
    capacity: usize,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self { subscribers: Mutex::new(Vec::new()), capacity: DEFAULT_SUBSCRIBER_CAPACITY }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { subscribers: Mutex::new(Vec::new()), capacity }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, message: Message) -> BusResult<()> {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain_mut(|sub| {
            if !topic_matches(&message.topic, &sub.pattern) {
                return true;
            }
            match sub.sender.try_send(message.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(topic = %message.topic, pattern = %sub.pattern, "subscriber channel full, dropping message");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => false,
            }
        });
        Ok(())
    }

    async fn subscribe(&self, pattern: &str) -> BusResult<mpsc::Receiver<Message>> {
        let (sender, receiver) = mpsc::channel(self.capacity);
        self.subscribers.lock().push(Subscriber { pattern: pattern.to_string(), sender });
        Ok(receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(topic: &str) -> Message {
        Message { topic: topic.to_string(), key: "k".to_string(), value: b"v".to_vec(), headers: Vec::new(), timestamp_nanos: 0 }
    }

    #[tokio::test]
    async fn an_exact_subscription_receives_matching_messages() {
        let bus = InMemoryEventBus::new();
        let mut rx = bus.subscribe("scbe.public.ko.heartbeat").await.unwrap();
        bus.publish(message("scbe.public.ko.heartbeat")).await.unwrap();
        let received = rx.recv().await.unwrap();
        assert_eq!(received.topic, "scbe.public.ko.heartbeat");
    }

    #[tokio::test]
    async fn an_exact_subscription_does_not_receive_other_topics() {
        let bus = InMemoryEventBus::new();
        let mut rx = bus.subscribe("scbe.public.ko.heartbeat").await.unwrap();
        bus.publish(message("scbe.public.av.heartbeat")).await.unwrap();
        bus.publish(message("scbe.public.ko.heartbeat")).await.unwrap();
        let received = rx.recv().await.unwrap();
        assert_eq!(received.topic, "scbe.public.ko.heartbeat");
    }

    #[tokio::test]
    async fn a_tier_wildcard_receives_every_tongue_and_event_under_that_tier() {
        let bus = InMemoryEventBus::new();
        let mut rx = bus.subscribe("scbe.private.*").await.unwrap();
        bus.publish(message("scbe.public.ko.heartbeat")).await.unwrap();
        bus.publish(message("scbe.private.dr.decision.capsule")).await.unwrap();
        let received = rx.recv().await.unwrap();
        assert_eq!(received.topic, "scbe.private.dr.decision.capsule");
    }

    #[tokio::test]
    async fn multiple_subscribers_each_receive_a_matching_publish() {
        let bus = InMemoryEventBus::new();
        let mut rx_a = bus.subscribe("scbe.public.ko.heartbeat").await.unwrap();
        let mut rx_b = bus.subscribe("scbe.public.*").await.unwrap();
        bus.publish(message("scbe.public.ko.heartbeat")).await.unwrap();
        assert!(rx_a.recv().await.is_some());
        assert!(rx_b.recv().await.is_some());
    }

    #[tokio::test]
    async fn dropping_a_subscriber_lets_it_be_pruned_on_next_publish() {
        let bus = InMemoryEventBus::new();
        {
            let _rx = bus.subscribe("scbe.public.ko.heartbeat").await.unwrap();
            assert_eq!(bus.subscriber_count(), 1);
        }
        bus.publish(message("scbe.public.ko.heartbeat")).await.unwrap();
        assert_eq!(bus.subscriber_count(), 0);
    }
}
