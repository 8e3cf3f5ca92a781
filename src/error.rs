use thiserror::Error;

use crate::MAX_CAPACITY;

/// An error returned when a [`HashSet`](crate::HashSet) cannot be constructed
/// with the requested capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The capacity hint was zero.
    #[error("capacity hint must be non-zero")]
    Zero,
    /// The capacity hint exceeded [`MAX_CAPACITY`].
    #[error("capacity hint {0} exceeds the maximum of {max}", max = MAX_CAPACITY)]
    Overflow(usize),
}
