//! Observer registry for state change notifications.
//!
//! The pager calls every registered observer with a read-only view of its
//! [`ListState`] after each transition. Observers run synchronously on the
//! pager's own task, in registration order.

use super::state::ListState;
use super::types::SubscriptionId;

type Callback<R, C> = Box<dyn FnMut(&ListState<R, C>) + Send>;

pub(super) struct Observers<R, C> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<R, C>)>,
}

impl<R, C> Default for Observers<R, C> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<R, C> Observers<R, C> {
    pub(super) fn add(&mut self, callback: Callback<R, C>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn notify(&mut self, state: &ListState<R, C>) {
        for (_, callback) in self.entries.iter_mut() {
            callback(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_in_registration_order_and_remove() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers: Observers<u32, u32> = Observers::default();

        let first = {
            let log = Arc::clone(&log);
            observers.add(Box::new(move |_| log.lock().unwrap().push("first")))
        };
        {
            let log = Arc::clone(&log);
            observers.add(Box::new(move |_| log.lock().unwrap().push("second")));
        }

        observers.notify(&ListState::new());
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);

        assert!(observers.remove(first));
        assert!(!observers.remove(first));
        assert_eq!(observers.len(), 1);

        observers.notify(&ListState::new());
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "second"]);
    }
}
