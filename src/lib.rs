//! Small shared building blocks for starting up a server: a registry of named startup arguments
//! with default values, and a handful of immutable collection types.
//!
//! # Purpose
//! Both halves of this crate are thin. The [`startup`] module holds values that are known by key
//! ahead of time and might be overridden before use, while the [`immutable`] module wraps shared,
//! read-only sequences, sets and maps so that "this can't change" is something the type system
//! says rather than something a comment promises.
//!
//! # Error Handling
//! Lookups that can reasonably miss return an [`Option`]. Where a caller asks for something more
//! specific (a typed argument, a collection without duplicates) the failure is a strongly typed
//! error, using enums for static dispatch with small structs that implement
//! [`Error`](std::error::Error). Constructors that mirror a literal (e.g. [`immutable_set!`]) panic
//! instead, because a duplicate in a literal is a programming error, not a runtime condition.
//!
//! # Immutability
//! None of the [`immutable`] types expose a way to push, insert or remove. A mutation attempt is a
//! compile error rather than a runtime one:
//! ```compile_fail
//! # use startup_common::immutable::ImmutableList;
//! let list = ImmutableList::of([1, 2, 3]);
//! list.push(4);
//! ```
//!
//! # Dependencies
//! Errors are derived with `derive_more`, ordered storage comes from `indexmap` and the registry
//! reports what it does through `tracing`.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "immutable")]
pub mod immutable;
#[cfg(feature = "startup")]
pub mod startup;

pub(crate) mod util;
