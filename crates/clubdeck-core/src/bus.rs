//! Page-scoped broadcast bus.
//!
//! Decouples the countdown banner from the pricing section: the banner
//! publishes [`Signal::ClaimDiscount`] and whoever is subscribed picks it up
//! on its next drain. Delivery is at-most-once per dispatch per subscriber,
//! and a dispatch never reaches subscribers registered after it.
//!
//! All access happens inside the single-threaded update loop, so the bus is
//! plain owned state with no locking.

use std::collections::HashMap;
use std::collections::VecDeque;

/// A broadcast signal. No payloads: the signal name is the whole contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Emitted by the countdown banner's claim action; reveals the discount
    /// in the pricing section.
    ClaimDiscount,
}

/// Handle identifying a live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// In-process publish/subscribe fan-out with per-subscriber queues.
#[derive(Debug, Default)]
pub struct SignalBus {
    next_id: u64,
    queues: HashMap<SubscriptionId, VecDeque<Signal>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Must be paired with [`unsubscribe`] when the
    /// owning component goes away, or its queue leaks.
    ///
    /// [`unsubscribe`]: SignalBus::unsubscribe
    pub fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.queues.insert(id, VecDeque::new());
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.queues.remove(&id);
    }

    /// Fan a signal out to every live subscriber.
    pub fn publish(&mut self, signal: Signal) {
        tracing::debug!("bus publish: {signal:?} -> {} subscribers", self.queues.len());
        for queue in self.queues.values_mut() {
            queue.push_back(signal);
        }
    }

    /// Consume everything pending for one subscriber.
    pub fn drain(&mut self, id: SubscriptionId) -> Vec<Signal> {
        match self.queues.get_mut(&id) {
            Some(queue) => queue.drain(..).collect(),
            None => Vec::new(),
        }
    }

    /// Number of live subscriptions (diagnostics only).
    pub fn subscriber_count(&self) -> usize {
        self.queues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers_once() {
        let mut bus = SignalBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(Signal::ClaimDiscount);

        assert_eq!(bus.drain(a), vec![Signal::ClaimDiscount]);
        assert_eq!(bus.drain(b), vec![Signal::ClaimDiscount]);
        // At-most-once: a second drain is empty
        assert!(bus.drain(a).is_empty());
    }

    #[test]
    fn test_late_subscriber_misses_dispatch() {
        let mut bus = SignalBus::new();
        bus.publish(Signal::ClaimDiscount);
        let late = bus.subscribe();
        assert!(bus.drain(late).is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus = SignalBus::new();
        let a = bus.subscribe();
        bus.unsubscribe(a);
        bus.publish(Signal::ClaimDiscount);
        assert!(bus.drain(a).is_empty());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_multiple_dispatches_queue_in_order() {
        let mut bus = SignalBus::new();
        let a = bus.subscribe();
        bus.publish(Signal::ClaimDiscount);
        bus.publish(Signal::ClaimDiscount);
        assert_eq!(bus.drain(a).len(), 2);
    }
}
