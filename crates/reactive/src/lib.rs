//! Observa Reactive - Observable collection for Observa.
//!
//! This crate implements an ordered, mutable collection that notifies
//! subscribers whenever its contents change. Each notification carries
//! independent snapshots of the contents before and after the change.
//!
//! # Core Concepts
//!
//! - `ObservableCollection`: The collection; owns one private dispatcher
//! - `ChangeEvent`: Mutation kind plus before/after snapshots
//! - `Subscription`: Handle that removes a listener when unsubscribed
//!
//! # Example
//!
//! ```rust
//! use observa_reactive::{ChangeKind, ObservableCollection};
//!
//! let mut collection = ObservableCollection::with_initial(vec![4]);
//!
//! collection.subscribe_to_changes(|e| {
//!     assert_eq!(e.kind, ChangeKind::AddRange);
//!     assert_eq!(e.before, vec![4]);
//!     assert_eq!(e.after, vec![4, 1, 2, 3]);
//! });
//!
//! collection.add_range([1, 2, 3]);
//! ```

#![no_std]

extern crate alloc;

pub mod change_event;
pub mod observable;
pub mod subscription;

pub use change_event::{ChangeEvent, ChangeKind};
pub use observable::{ObservableCollection, COLLECTION_CHANGED};
pub use subscription::{ChangeCallback, Subscription};

// Re-export commonly used types from dependencies
pub use observa_core::{Equality, JsonEquality, ValueEquality};
