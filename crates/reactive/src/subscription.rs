//! Subscriptions to collection changes.
//!
//! A `Subscription` is the disposal handle returned when a listener is
//! registered on an observable collection.

use crate::change_event::ChangeEvent;
use crate::observable::COLLECTION_CHANGED;
use alloc::rc::{Rc, Weak};
use core::cell::Cell;
use core::fmt;
use observa_events::{EventDispatcher, Handler};

/// Callback type for change notifications.
pub type ChangeCallback<T> = Handler<ChangeEvent<T>>;

/// A listener registration on an observable collection.
///
/// Dropping a `Subscription` leaves the listener registered; call
/// [`unsubscribe`](Self::unsubscribe) to remove it. The handle only holds a
/// weak reference to the collection's dispatcher, so it never keeps the
/// collection's listeners alive on its own.
pub struct Subscription<T> {
    dispatcher: Weak<EventDispatcher<ChangeEvent<T>>>,
    handler: ChangeCallback<T>,
    active: Cell<bool>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(
        dispatcher: &Rc<EventDispatcher<ChangeEvent<T>>>,
        handler: ChangeCallback<T>,
    ) -> Self {
        Self {
            dispatcher: Rc::downgrade(dispatcher),
            handler,
            active: Cell::new(true),
        }
    }

    /// Removes this listener from the collection.
    ///
    /// Only the first call has an effect; later calls are no-ops, as is
    /// calling it after the collection was dropped.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(dispatcher) = self.dispatcher.upgrade() {
            dispatcher.unsubscribe(COLLECTION_CHANGED, &self.handler);
        }
    }

    /// Returns whether this listener is still registered.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.get() && self.dispatcher.strong_count() > 0
    }

    /// Returns the registered handler.
    #[inline]
    pub fn handler(&self) -> &ChangeCallback<T> {
        &self.handler
    }

    /// Converts this subscription into a zero-argument disposal closure.
    pub fn into_unsubscribe_fn(self) -> impl Fn() {
        move || self.unsubscribe()
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handler", &self.handler)
            .field("active", &self.is_active())
            .finish()
    }
}
