#![doc = include_str!("../README.md")]
#![deny(missing_debug_implementations, missing_docs)]

mod cfg;
mod error;
mod raw;
mod set;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::CapacityError;
pub use raw::{DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
pub use set::{DefaultHashBuilder, HashSet, HashSetBuilder, Iter};
