//! Observable collection implementation.
//!
//! This module provides `ObservableCollection`, an ordered sequence of values
//! that notifies subscribers after every mutation. Each notification is a
//! `ChangeEvent` carrying snapshots of the contents before and after.

use crate::change_event::{ChangeEvent, ChangeKind};
use crate::subscription::Subscription;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use observa_core::{Equality, ValueEquality};
use observa_events::EventDispatcher;

/// Event name under which collection changes are dispatched.
pub const COLLECTION_CHANGED: &str = "collectionChanged";

/// An ordered, mutable sequence that reports every change to its subscribers.
///
/// Every call to [`add`](Self::add), [`add_range`](Self::add_range),
/// [`remove`](Self::remove) or [`clear`](Self::clear) emits exactly one
/// [`ChangeEvent`] after the mutation has been applied. Subscribers never see
/// the live sequence, only owned snapshots.
///
/// `E` decides which element [`remove`](Self::remove) matches. The default,
/// [`ValueEquality`], compares by `PartialEq`.
///
/// Handlers run synchronously inside the mutating call. A handler that panics
/// aborts the remaining handlers for that change; the mutation itself is
/// already applied.
///
/// # Example
///
/// ```rust
/// use observa_reactive::{ChangeKind, ObservableCollection};
///
/// let mut collection = ObservableCollection::with_initial(vec!["one"]);
///
/// let sub = collection.subscribe_to_changes(|e| {
///     assert_eq!(e.kind, ChangeKind::Add);
///     assert_eq!(e.before, vec!["one"]);
///     assert_eq!(e.after, vec!["one", "two"]);
/// });
///
/// collection.add("two");
/// sub.unsubscribe();
///
/// assert_eq!(collection.to_snapshot(), vec!["one", "two"]);
/// ```
pub struct ObservableCollection<T, E = ValueEquality> {
    /// The live sequence
    items: Vec<T>,
    /// Dispatcher private to this collection
    dispatcher: Rc<EventDispatcher<ChangeEvent<T>>>,
    /// Strategy used to locate elements by value
    equality: E,
}

impl<T> Default for ObservableCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObservableCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::with_initial(Vec::new())
    }

    /// Creates a collection holding `initial`.
    pub fn with_initial(initial: Vec<T>) -> Self {
        Self::with_equality(initial, ValueEquality)
    }
}

impl<T, E> ObservableCollection<T, E> {
    /// Creates a collection holding `initial` that matches elements with
    /// `equality`.
    pub fn with_equality(initial: Vec<T>, equality: E) -> Self {
        Self {
            items: initial,
            dispatcher: Rc::new(EventDispatcher::new()),
            equality,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of registered change listeners.
    #[inline]
    pub fn subscription_count(&self) -> usize {
        self.dispatcher.listener_count(COLLECTION_CHANGED)
    }

    /// Returns the equality strategy.
    #[inline]
    pub fn equality(&self) -> &E {
        &self.equality
    }

    /// Registers `callback` to receive every future change event.
    ///
    /// Subscribing does not replay the current contents. The returned
    /// [`Subscription`] removes exactly this registration when unsubscribed.
    pub fn subscribe_to_changes<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&ChangeEvent<T>) + 'static,
    {
        let handler = self.dispatcher.on(COLLECTION_CHANGED, callback);
        Subscription::new(&self.dispatcher, handler)
    }
}

impl<T: Clone, E> ObservableCollection<T, E> {
    /// Returns an independent copy of the current contents.
    #[inline]
    pub fn to_snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Appends `value`.
    pub fn add(&mut self, value: T) {
        self.mutate(ChangeKind::Add, |items| items.push(value));
    }

    /// Appends every value of `values`, in order, as a single change.
    ///
    /// An empty batch still emits one event.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.mutate(ChangeKind::AddRange, |items| items.extend(values));
    }

    /// Removes every element.
    ///
    /// Clearing an empty collection still emits an event.
    pub fn clear(&mut self) {
        self.mutate(ChangeKind::Clear, Vec::clear);
    }

    /// Applies `op` to the live sequence and notifies subscribers.
    fn mutate<R>(&mut self, kind: ChangeKind, op: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let before = self.items.clone();
        let result = op(&mut self.items);
        let event = ChangeEvent::new(kind, before, self.items.clone());

        tracing::debug!(
            kind = kind.as_str(),
            before = event.before.len(),
            after = event.after.len(),
            "collection changed"
        );
        self.dispatcher.emit(COLLECTION_CHANGED, &event);
        result
    }
}

impl<T: Clone, E: Equality<T>> ObservableCollection<T, E> {
    /// Removes the first element equal to `value` and returns it.
    ///
    /// If nothing matches the contents are unchanged, but a `Remove` event
    /// with identical snapshots is still emitted.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.position(value);
        self.mutate(ChangeKind::Remove, |items| index.map(|i| items.remove(i)))
    }

    /// Returns true if some element is equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|item| self.equality.equals(item, value))
    }
}

impl<T> From<Vec<T>> for ObservableCollection<T> {
    fn from(initial: Vec<T>) -> Self {
        Self::with_initial(initial)
    }
}

impl<T> FromIterator<T> for ObservableCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_initial(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for ObservableCollection<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCollection")
            .field("items", &self.items)
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}
