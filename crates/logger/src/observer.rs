//! crates/logger/src/observer.rs
//! Subscriptions to threshold changes.

use std::fmt;

use crate::Threshold;

/// Receives the new threshold whenever a logger's level is set.
///
/// Implemented for every `FnMut(Threshold) + Send` closure, so most callers
/// register a closure directly.
pub trait LevelObserver: Send {
    /// Called synchronously from [`Logger::set_log_level`](crate::Logger::set_log_level).
    fn level_changed(&mut self, threshold: Threshold);
}

impl<F> LevelObserver for F
where
    F: FnMut(Threshold) + Send,
{
    fn level_changed(&mut self, threshold: Threshold) {
        self(threshold);
    }
}

/// Handle returned when registering an observer, used to remove it again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn LevelObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn LevelObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Notifies every observer in registration order.
    pub(crate) fn notify(&mut self, threshold: Threshold) {
        for (_, observer) in &mut self.entries {
            observer.level_changed(threshold);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
