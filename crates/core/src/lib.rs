//! Observa Core - Shared types for the Observa observable collection.
//!
//! This crate provides:
//!
//! - `Error`/`Result`: Error types for the lower-level helpers
//! - `Equality`: The structural-equality capability used to match values
//! - `ValueEquality`: Default strategy, deep equality via `PartialEq`
//! - `JsonEquality`: Equality by canonical JSON form
//!
//! # Example
//!
//! ```rust
//! use observa_core::{Equality, JsonEquality, ValueEquality};
//!
//! assert!(ValueEquality.equals(&"one", &"one"));
//! assert!(JsonEquality.equals(&[1, 2, 3], &[1, 2, 3]));
//!
//! // Any comparison closure works as a strategy.
//! let case_insensitive = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
//! assert!(case_insensitive.equals(&"One", &"one"));
//! ```

#![no_std]

extern crate alloc;

mod equality;
mod error;

pub use equality::{canonical_form, Equality, JsonEquality, ValueEquality};
pub use error::{Error, Result};
