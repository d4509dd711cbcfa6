//! Named-event dispatcher.
//!
//! This module provides `EventDispatcher`, which keeps an ordered list of
//! handlers per event name and invokes them synchronously on emit.

use crate::handler::Handler;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::HashMap;

/// A many-to-many, name-scoped notification primitive.
///
/// All methods take `&self`. The handler table lives in a `RefCell` whose
/// borrow is never held while a handler runs, so handlers may subscribe or
/// unsubscribe (on any name) from inside an emission.
///
/// # Example
///
/// ```rust
/// use observa_events::EventDispatcher;
///
/// let dispatcher = EventDispatcher::<u32>::new();
/// let handler = dispatcher.on("tick", |n| assert_eq!(*n, 7));
///
/// dispatcher.emit("tick", &7);
/// dispatcher.unsubscribe("tick", &handler);
/// assert!(!dispatcher.has_listeners("tick"));
/// ```
pub struct EventDispatcher<P> {
    /// Event name -> handlers in subscription order
    handlers: RefCell<HashMap<String, Vec<Handler<P>>>>,
}

impl<P> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> EventDispatcher<P> {
    /// Creates a new dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(HashMap::new()),
        }
    }

    /// Registers `handler` under `name` and returns it.
    ///
    /// The handler is appended after any existing handlers for `name`.
    /// Subscribing the same handler twice creates two independent entries.
    pub fn subscribe(&self, name: &str, handler: Handler<P>) -> Handler<P> {
        let mut handlers = self.handlers.borrow_mut();
        let list = handlers.entry(String::from(name)).or_default();
        list.push(handler.clone());
        tracing::trace!(event = name, handlers = list.len(), "handler subscribed");
        handler
    }

    /// Wraps `callback` in a new [`Handler`] and subscribes it under `name`.
    pub fn on<F>(&self, name: &str, callback: F) -> Handler<P>
    where
        F: Fn(&P) + 'static,
    {
        self.subscribe(name, Handler::new(callback))
    }

    /// Removes the first registration of `handler` under `name`.
    ///
    /// Unknown names and handlers that are not registered are ignored.
    /// Returns true if a registration was removed.
    pub fn unsubscribe(&self, name: &str, handler: &Handler<P>) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let Some(list) = handlers.get_mut(name) else {
            return false;
        };
        let Some(pos) = list.iter().position(|h| h.same(handler)) else {
            return false;
        };
        list.remove(pos);
        let remaining = list.len();
        if remaining == 0 {
            handlers.remove(name);
        }
        tracing::trace!(event = name, handlers = remaining, "handler unsubscribed");
        true
    }

    /// Invokes every handler registered under `name` with `payload`.
    ///
    /// The handler list is copied before the first call, so registrations
    /// made or removed by a handler only take effect on the next emit. A
    /// panicking handler stops the remaining handlers of this pass; the
    /// dispatcher itself stays usable.
    pub fn emit(&self, name: &str, payload: &P) {
        let snapshot: Vec<Handler<P>> = match self.handlers.borrow().get(name) {
            Some(list) => list.clone(),
            None => return,
        };
        tracing::trace!(event = name, handlers = snapshot.len(), "emitting event");
        for handler in &snapshot {
            handler.call(payload);
        }
    }

    /// Returns the number of registrations under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.handlers.borrow().get(name).map(Vec::len).unwrap_or(0)
    }

    /// Returns true if at least one handler is registered under `name`.
    #[inline]
    pub fn has_listeners(&self, name: &str) -> bool {
        self.listener_count(name) > 0
    }

    /// Returns the names that currently have handlers.
    pub fn event_names(&self) -> Vec<String> {
        self.handlers.borrow().keys().cloned().collect()
    }

    /// Removes every handler for every name.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }
}
