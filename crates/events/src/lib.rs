//! Observa Events - Named-event dispatcher for Observa.
//!
//! This crate implements a small synchronous publish/subscribe primitive.
//! Handlers are registered under an event name and invoked, in subscription
//! order, whenever that name is emitted.
//!
//! # Core Concepts
//!
//! - `Handler`: A reference-counted callback compared by identity
//! - `EventDispatcher`: Maps event names to ordered handler lists
//!
//! # Example
//!
//! ```rust
//! use observa_events::{EventDispatcher, Handler};
//!
//! let dispatcher = EventDispatcher::<String>::new();
//!
//! let handler = dispatcher.subscribe("greet", Handler::new(|name: &String| {
//!     assert_eq!(name, "world");
//! }));
//!
//! dispatcher.emit("greet", &"world".to_string());
//!
//! // Removing is by identity; removing twice is a no-op.
//! dispatcher.unsubscribe("greet", &handler);
//! dispatcher.unsubscribe("greet", &handler);
//! ```

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod handler;

pub use dispatcher::EventDispatcher;
pub use handler::{Handler, HandlerFn};
