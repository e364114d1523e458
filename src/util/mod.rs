pub mod panic;
#[cfg(feature = "immutable")]
pub mod result;
