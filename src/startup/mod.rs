//! A module containing [`ArgumentRegistry`] and associated types.
//!
//! Startup arguments are registered under a key with a default value. The default is always
//! available, so reading an argument never fails; an explicit value set later simply takes its
//! place. Values are stored as an [`ArgumentValue`], which lets one registry hold arguments of
//! different types while [`ArgumentRegistry::get_as`] recovers them with a type check rather than a
//! cast.
//!
//! The registry is a plain owned value. Mutating it requires a `&mut` borrow, so sharing it between
//! threads for writing means wrapping it in a lock first.
//!
//! # Examples
//! ```
//! # use startup_common::startup::ArgumentRegistry;
//! let mut args = ArgumentRegistry::new();
//! args.add("port", 8080).add("host", "localhost");
//!
//! assert_eq!(args.get_as::<u16>("port").ok(), Some(8080));
//! args.set("port", 9090).expect("port is registered as an integer");
//! assert_eq!(args.get_as::<u16>("port").ok(), Some(9090));
//! assert!(args.get("timeout").is_none());
//! ```

mod argument;
mod error;
mod registry;
mod tests;
mod value;

pub use argument::*;
pub use error::*;
pub use registry::*;
pub use value::*;
