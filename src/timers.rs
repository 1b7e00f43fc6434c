//! Keyed slots for pending timer handles.
//!
//! A slot owns at most one handle. Scheduling into an occupied slot drops the
//! previous handle, and handles cancel themselves on drop (`gloo_timers`
//! `Timeout`/`Interval`), so re-arming a banner or a delayed reopen never
//! leaves the older callback running.

use std::collections::HashMap;
use std::hash::Hash;

pub struct TimerSlots<K, H> {
    slots: HashMap<K, H>,
}

impl<K: Eq + Hash, H> Default for TimerSlots<K, H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H> TimerSlots<K, H> {
    /// Stores `handle` under `key`, returning true when an older handle was replaced.
    pub fn schedule(&mut self, key: K, handle: H) -> bool {
        self.slots.insert(key, handle).is_some()
    }

    /// Removes the handle under `key` without dropping it, for a timer that is
    /// firing and should no longer count as pending.
    pub fn take(&mut self, key: &K) -> Option<H> {
        self.slots.remove(key)
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.slots.clear();
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle {
        dropped: Rc<Cell<u32>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    fn handle(counter: &Rc<Cell<u32>>) -> Handle {
        Handle {
            dropped: counter.clone(),
        }
    }

    #[test]
    fn rescheduling_drops_the_previous_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::default();

        assert!(!slots.schedule("banner", handle(&dropped)));
        assert!(slots.schedule("banner", handle(&dropped)));
        assert_eq!(dropped.get(), 1);
        assert!(slots.is_pending(&"banner"));
    }

    #[test]
    fn independent_keys_do_not_interfere() {
        let dropped = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::default();

        slots.schedule("banner", handle(&dropped));
        slots.schedule("reopen", handle(&dropped));
        assert!(slots.cancel(&"reopen"));
        assert!(!slots.cancel(&"reopen"));
        assert!(slots.is_pending(&"banner"));
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn cancel_all_drops_everything() {
        let dropped = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::default();

        slots.schedule(1, handle(&dropped));
        slots.schedule(2, handle(&dropped));
        slots.cancel_all();

        assert!(!slots.is_pending(&1));
        assert!(!slots.is_pending(&2));
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn taken_slot_is_no_longer_pending() {
        let dropped = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::default();

        slots.schedule("panel-close", handle(&dropped));
        let fired = slots.take(&"panel-close");
        assert!(fired.is_some());
        assert!(!slots.is_pending(&"panel-close"));
        assert_eq!(dropped.get(), 0);

        drop(fired);
        assert_eq!(dropped.get(), 1);
        assert!(slots.take(&"panel-close").is_none());
    }
}
