//! Change events emitted by an observable collection.
//!
//! A `ChangeEvent` records which mutation happened together with the
//! collection contents right before and right after it.

use alloc::vec::Vec;
use core::fmt;

/// The kind of mutation a change event describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A single value was appended.
    Add,
    /// A batch of values was appended.
    AddRange,
    /// The first matching value was removed (if any matched).
    Remove,
    /// All values were removed.
    Clear,
}

impl ChangeKind {
    /// Returns the event type name (`"add"`, `"addRange"`, `"remove"`, `"clear"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Add => "add",
            ChangeKind::AddRange => "addRange",
            ChangeKind::Remove => "remove",
            ChangeKind::Clear => "clear",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutation of an observable collection.
///
/// `before` and `after` are owned snapshots, independent of the live
/// collection and of each other.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeEvent<T> {
    /// Which operation produced this event
    pub kind: ChangeKind,
    /// Contents before the mutation
    pub before: Vec<T>,
    /// Contents after the mutation
    pub after: Vec<T>,
}

impl<T> ChangeEvent<T> {
    /// Creates a change event.
    #[inline]
    pub fn new(kind: ChangeKind, before: Vec<T>, after: Vec<T>) -> Self {
        Self {
            kind,
            before,
            after,
        }
    }

    /// Returns the change in length caused by the mutation.
    #[inline]
    pub fn len_delta(&self) -> isize {
        self.after.len() as isize - self.before.len() as isize
    }
}

impl<T: PartialEq> ChangeEvent<T> {
    /// Returns true if the mutation left the contents unchanged.
    ///
    /// This happens for a `Remove` that matched nothing, an empty
    /// `AddRange`, or a `Clear` on an empty collection.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}
