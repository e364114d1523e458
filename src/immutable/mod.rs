//! Read-only collection types: [`ImmutableList`], [`ImmutableSet`] and [`ImmutableMap`].
//!
//! Each type can be built from a fixed set of elements (`of`, or the [`immutable_list!`],
//! [`immutable_set!`] and [`immutable_map!`] macros) or by copying an existing collection
//! (`copy_of`). A copy never observes later changes to the collection it was copied from.
//!
//! Once built, none of these types can be changed. They have no methods that add or remove
//! elements and hand out no mutable references, so attempting a structural mutation is rejected by
//! the compiler. Contents are kept behind an [`Arc`](std::sync::Arc), making clones cheap and
//! sharing them between threads possible.
//!
//! Lists keep elements in the order they were provided and sets and maps iterate in insertion
//! order, although equality for sets and maps ignores order.
//!
//! [`immutable_list!`]: crate::immutable_list
//! [`immutable_set!`]: crate::immutable_set
//! [`immutable_map!`]: crate::immutable_map

mod error;
mod list;
mod macros;
mod map;
mod set;

pub use error::*;
pub use list::*;
pub use map::*;
pub use set::*;
