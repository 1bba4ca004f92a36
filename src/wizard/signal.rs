//! Completion channel
//!
//! The sequence publishes progress and the one-time "setup complete" signal
//! here. Listeners subscribe explicitly and unsubscribe when torn down.

use std::sync::mpsc::{self, Receiver, Sender};

/// Events published as slides complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionEvent {
    /// Aggregate completion changed (0..=100)
    Progress(u8),
    /// Every slide is done; published once per sequence
    SetupComplete,
}

/// Handle identifying a subscription on a bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The receiving end of a subscription
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<CompletionEvent>,
}

impl Subscription {
    /// Identifier to pass to `CompletionBus::unsubscribe`
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take every event published since the last drain
    pub fn drain(&self) -> Vec<CompletionEvent> {
        self.receiver.try_iter().collect()
    }
}

/// Fan-out channel for completion events
#[derive(Debug, Default)]
pub struct CompletionBus {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<CompletionEvent>)>,
}

impl CompletionBus {
    /// Create a bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener
    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (sender, receiver) = mpsc::channel();
        self.subscribers.push((id, sender));
        Subscription { id, receiver }
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Send an event to every live subscriber, dropping ones whose receiver is gone.
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&mut self, event: CompletionEvent) -> usize {
        self.subscribers
            .retain(|(_, sender)| sender.send(event).is_ok());
        self.subscribers.len()
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let mut bus = CompletionBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        assert_eq!(bus.publish(CompletionEvent::Progress(50)), 2);

        assert_eq!(a.drain(), vec![CompletionEvent::Progress(50)]);
        assert_eq!(b.drain(), vec![CompletionEvent::Progress(50)]);
        assert!(a.drain().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus = CompletionBus::new();
        let sub = bus.subscribe();

        assert!(bus.unsubscribe(sub.id()));
        assert!(!bus.unsubscribe(sub.id()));
        assert_eq!(bus.publish(CompletionEvent::SetupComplete), 0);
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let mut bus = CompletionBus::new();
        let sub = bus.subscribe();
        drop(sub);

        assert_eq!(bus.publish(CompletionEvent::Progress(10)), 0);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
