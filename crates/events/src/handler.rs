//! Handler references.
//!
//! A [`Handler`] wraps a callback in an `Rc` so it can be registered, stored
//! by the caller, and later removed by identity.

use alloc::rc::Rc;
use core::fmt;

/// Callback type for event handlers.
pub type HandlerFn<P> = dyn Fn(&P);

/// A reference-counted event handler.
///
/// Equality is identity: two `Handler`s are equal only if they are clones of
/// the same registration source, never because their closures look alike.
pub struct Handler<P> {
    callback: Rc<HandlerFn<P>>,
}

impl<P> Handler<P> {
    /// Wraps a callback into a new handler with its own identity.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&P) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invokes the callback with `payload`.
    #[inline]
    pub fn call(&self, payload: &P) {
        (self.callback)(payload);
    }

    /// Returns true if both handlers share the same identity.
    #[inline]
    pub fn same(&self, other: &Handler<P>) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<P> Clone for Handler<P> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<P> PartialEq for Handler<P> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<P> Eq for Handler<P> {}

impl<P> fmt::Debug for Handler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("ptr", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}
