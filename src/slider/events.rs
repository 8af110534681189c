//! Change-end notifications
//!
//! Emits the committed value once per completed drag. Listeners are detached
//! when their [`Subscription`] is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type ChangeEndListener = Rc<dyn Fn(i64)>;

type Listeners = Rc<RefCell<Vec<ChangeEndListener>>>;

/// Notification channel for committed values
#[derive(Default)]
pub struct ChangeEndStream {
    listeners: Listeners,
}

impl ChangeEndStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays attached while the returned handle lives
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe(&self, listener: impl Fn(i64) + 'static) -> Subscription {
        let listener: ChangeEndListener = Rc::new(listener);
        self.listeners.borrow_mut().push(Rc::clone(&listener));
        Subscription {
            listener,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub(crate) fn emit(&self, value: i64) {
        // Snapshot so listeners may subscribe/unsubscribe while being notified
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            (listener)(value);
        }
    }
}

impl std::fmt::Debug for ChangeEndStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEndStream")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle keeping a change-end listener attached
pub struct Subscription {
    listener: ChangeEndListener,
    listeners: Weak<RefCell<Vec<ChangeEndListener>>>,
}

impl Subscription {
    /// Detach the listener now
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .retain(|item| !Rc::ptr_eq(item, &self.listener));
        }
    }
}
