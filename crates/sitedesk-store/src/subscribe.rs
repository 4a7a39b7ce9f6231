//! Change subscriptions
//!
//! Every store owns a [`Subscribers`] list and notifies it only after a
//! mutation has fully applied, so listeners always observe settled state.

use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw handle value
    #[inline]
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// Registered listeners for events of type `E`
pub struct Subscribers<E> {
    next: u64,
    listeners: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E> Subscribers<E> {
    /// Create an empty list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener in registration order
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of listeners
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if nobody is listening
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<u32> = Subscribers::new();

        let a = Rc::clone(&seen);
        subs.subscribe(move |e| a.borrow_mut().push(("a", *e)));
        let b = Rc::clone(&seen);
        subs.subscribe(move |e| b.borrow_mut().push(("b", *e)));

        subs.notify(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subs: Subscribers<()> = Subscribers::new();

        let c = Rc::clone(&count);
        let id = subs.subscribe(move |()| *c.borrow_mut() += 1);
        subs.notify(&());
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.notify(&());

        assert_eq!(*count.borrow(), 1);
        assert!(subs.is_empty());
    }
}
