// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode-change observer registry with token-based unsubscription.
//!
//! ## Usage
//!
//! 1) Register a closure with [`ModeObservers::subscribe`] and keep the
//!    returned [`Subscription`].
//! 2) Call [`ModeObservers::notify`] whenever the scene mode changes;
//!    observers run in subscription order.
//! 3) Detach with [`ModeObservers::unsubscribe`] when the listener goes away.
//!    Unsubscribing twice, or with a token from another registry, is a no-op.
//!
//! ## Minimal example
//!
//! ```rust
//! use circuitry_scene::{ModeObservers, SceneMode};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut observers = ModeObservers::new();
//! let seen = Rc::new(Cell::new(None));
//!
//! let seen_by_observer = Rc::clone(&seen);
//! let sub = observers.subscribe(Box::new(move |mode| {
//!     seen_by_observer.set(Some(mode));
//! }));
//!
//! observers.notify(SceneMode::Wire);
//! assert_eq!(seen.get(), Some(SceneMode::Wire));
//!
//! observers.unsubscribe(sub);
//! observers.notify(SceneMode::Normal);
//! assert_eq!(seen.get(), Some(SceneMode::Wire));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::SceneMode;

/// Token identifying one registered mode observer.
///
/// Tokens are unique per registry and never reused, so a stale token cannot
/// detach somebody else's observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// A boxed closure invoked with the new mode on every change.
pub type ModeObserver = Box<dyn FnMut(SceneMode)>;

/// Registry of scene mode-change observers.
#[derive(Default)]
pub struct ModeObservers {
    entries: Vec<(Subscription, ModeObserver)>,
    next_token: u64,
}

impl ModeObservers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer, returning the token that detaches it.
    pub fn subscribe(&mut self, observer: ModeObserver) -> Subscription {
        let token = Subscription(self.next_token);
        self.next_token += 1;
        self.entries.push((token, observer));
        token
    }

    /// Detaches the observer registered under `token`.
    ///
    /// Unknown or already-detached tokens are ignored.
    pub fn unsubscribe(&mut self, token: Subscription) {
        self.entries.retain(|(t, _)| *t != token);
    }

    /// Invokes every registered observer with `mode`, in subscription order.
    pub fn notify(&mut self, mode: SceneMode) {
        for (_, observer) in &mut self.entries {
            observer(mode);
        }
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for ModeObservers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModeObservers")
            .field("len", &self.entries.len())
            .field("next_token", &self.next_token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::ModeObservers;
    use crate::SceneMode;

    #[test]
    fn observers_run_in_subscription_order() {
        let mut observers = ModeObservers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            let _ = observers.subscribe(Box::new(move |_| order.borrow_mut().push(tag)));
        }

        observers.notify(SceneMode::Wire);
        assert_eq!(&*order.borrow(), &["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_detaches_exactly_one_observer() {
        let mut observers = ModeObservers::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let calls_a = Rc::clone(&calls);
        let sub_a = observers.subscribe(Box::new(move |_| calls_a.borrow_mut().push("a")));
        let calls_b = Rc::clone(&calls);
        let _sub_b = observers.subscribe(Box::new(move |_| calls_b.borrow_mut().push("b")));

        observers.unsubscribe(sub_a);
        observers.notify(SceneMode::Normal);

        assert_eq!(&*calls.borrow(), &["b"]);
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn double_unsubscribe_is_a_no_op() {
        let mut observers = ModeObservers::new();
        let sub = observers.subscribe(Box::new(|_| {}));

        observers.unsubscribe(sub);
        observers.unsubscribe(sub);
        assert!(observers.is_empty());
    }

    #[test]
    fn tokens_are_not_reused_after_unsubscribe() {
        let mut observers = ModeObservers::new();
        let first = observers.subscribe(Box::new(|_| {}));
        observers.unsubscribe(first);

        let second = observers.subscribe(Box::new(|_| {}));
        assert_ne!(first, second);

        // A stale token must not detach the new observer.
        observers.unsubscribe(first);
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn notify_with_no_observers_is_safe() {
        let mut observers = ModeObservers::new();
        observers.notify(SceneMode::Wire);
        assert!(observers.is_empty());
    }
}
