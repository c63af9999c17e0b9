//! Observer subscription and fan-out.
//!
//! Observers are notified synchronously, in subscription order, after every
//! state change. The same observer may be subscribed more than once; each
//! subscription is notified independently until it is removed.

use crate::core::Notification;
use std::fmt;
use std::sync::Arc;

/// Receiver of controller notifications.
pub trait Observer: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<F> Observer for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Handle returned by [`ObserverSet::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

/// Insertion-ordered set of subscribers.
#[derive(Default)]
pub struct ObserverSet {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Arc<dyn Observer>)>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer; effective for the next notification onward.
    pub fn subscribe(&mut self, observer: Arc<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, observer));
        id
    }

    /// Remove one subscription. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Notify every subscriber in subscription order.
    pub fn notify_all(&self, notification: Notification) {
        for (_, observer) in &self.subscribers {
            observer.notify(notification);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Tagged {
        tag: &'static str,
        log: Arc<Mutex<Vec<(&'static str, Notification)>>>,
    }

    impl Observer for Tagged {
        fn notify(&self, notification: Notification) {
            self.log.lock().unwrap().push((self.tag, notification));
        }
    }

    fn tagged(
        tag: &'static str,
        log: &Arc<Mutex<Vec<(&'static str, Notification)>>>,
    ) -> Arc<dyn Observer> {
        Arc::new(Tagged {
            tag,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn notify_all_preserves_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = ObserverSet::new();
        set.subscribe(tagged("a", &log));
        set.subscribe(tagged("b", &log));
        set.subscribe(tagged("c", &log));

        set.notify_all(Notification::LampOffNighttime);

        let seen: Vec<_> = log.lock().unwrap().iter().map(|(tag, _)| *tag).collect();
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_subscriptions_are_kept() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let observer = tagged("dup", &log);
        let mut set = ObserverSet::new();
        let first = set.subscribe(Arc::clone(&observer));
        let second = set.subscribe(observer);

        assert_ne!(first, second);
        set.notify_all(Notification::MotionDetected);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn unsubscribe_removes_only_that_subscription() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = ObserverSet::new();
        let a = set.subscribe(tagged("a", &log));
        set.subscribe(tagged("b", &log));

        assert!(set.unsubscribe(a));
        assert!(!set.unsubscribe(a));
        assert_eq!(set.len(), 1);

        set.notify_all(Notification::IntrusionDetected);
        assert_eq!(
            *log.lock().unwrap(),
            vec![("b", Notification::IntrusionDetected)]
        );
    }

    #[test]
    fn closures_are_observers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut set = ObserverSet::new();
        set.subscribe(Arc::new(move |n: Notification| sink.lock().unwrap().push(n)));

        set.notify_all(Notification::LampOnFullBrightness);
        assert_eq!(*seen.lock().unwrap(), vec![Notification::LampOnFullBrightness]);
    }

    #[test]
    fn empty_set_notifies_nobody() {
        let set = ObserverSet::new();
        assert!(set.is_empty());
        set.notify_all(Notification::LampOffDaylight);
    }
}
