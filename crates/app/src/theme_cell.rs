//! Observable theme cell — the in-memory dark-mode flag.
//!
//! A single mutable boolean with synchronous subscriber notification.
//! The execution model is single-threaded and cooperative: a subscriber's
//! callback runs to completion inside [`ThemeCell::set`], in subscription
//! order, before `set` returns. Persistence is deliberately *not* handled
//! here — see [`crate::theme_service`] for the composed operation.

use std::cell::{Cell, RefCell};

/// Handle returned by [`ThemeCell::subscribe`], usable to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Callback = Box<dyn Fn(bool)>;

/// A mutable boolean cell that notifies registered subscribers
/// synchronously on every update.
///
/// The initial value is always `false` (light mode), regardless of any
/// persisted preference — a freshly constructed cell and the persisted
/// state can disagree until a set operation runs.
///
/// Subscribing or unsubscribing from inside a notification callback is
/// not supported; callbacks may read [`current`](Self::current) freely.
pub struct ThemeCell {
    dark: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
}

impl Default for ThemeCell {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeCell {
    /// Create a cell holding `false`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dark: Cell::new(false),
            next_id: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// The current value of the flag.
    #[must_use]
    pub fn current(&self) -> bool {
        self.dark.get()
    }

    /// Register a callback invoked synchronously on every update.
    ///
    /// The callback does not fire for the current value, only for updates
    /// made after the subscription is created.
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> SubscriberId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Box::new(callback)));
        SubscriberId(id)
    }

    /// Remove a previously registered subscriber.
    ///
    /// Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id.0);
    }

    /// Update the flag and notify every subscriber, in subscription order.
    ///
    /// The value is updated before the first callback runs, so callbacks
    /// observing [`current`](Self::current) see the new value. Every
    /// callback has returned by the time `set` returns.
    pub fn set(&self, dark: bool) {
        self.dark.set(dark);
        for (_, callback) in self.subscribers.borrow().iter() {
            callback(dark);
        }
    }
}

impl std::fmt::Debug for ThemeCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeCell")
            .field("dark", &self.dark.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn should_start_light() {
        assert!(!ThemeCell::new().current());
    }

    #[test]
    fn should_keep_last_written_value() {
        let cell = ThemeCell::new();
        cell.set(true);
        cell.set(false);
        assert!(!cell.current());
    }

    #[test]
    fn should_notify_subscriber_exactly_once_per_set() {
        let cell = ThemeCell::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        cell.subscribe(move |dark| sink.borrow_mut().push(dark));

        cell.set(true);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn should_notify_in_subscription_order() {
        let cell = ThemeCell::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        cell.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        cell.subscribe(move |_| second.borrow_mut().push("second"));

        cell.set(true);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn should_expose_new_value_to_callbacks() {
        let cell = Rc::new(ThemeCell::new());
        let observed = Rc::new(Cell::new(false));

        let handle = Rc::clone(&cell);
        let sink = Rc::clone(&observed);
        cell.subscribe(move |_| sink.set(handle.current()));

        cell.set(true);
        assert!(observed.get());
    }

    #[test]
    fn should_not_notify_after_unsubscribe() {
        let cell = ThemeCell::new();
        let count = Rc::new(Cell::new(0u32));

        let sink = Rc::clone(&count);
        let id = cell.subscribe(move |_| sink.set(sink.get() + 1));

        cell.set(true);
        cell.unsubscribe(id);
        cell.set(false);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn should_not_replay_updates_made_before_subscription() {
        let cell = ThemeCell::new();
        cell.set(true);

        let count = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&count);
        cell.subscribe(move |_| sink.set(sink.get() + 1));

        assert_eq!(count.get(), 0);
    }
}
