//! Reserved-capacity request value.

/// A request for `capacity` reserved slots and zero present elements.
///
/// Passing a bare `usize` to a constructor reads as "this many elements";
/// wrapping it in a `CapacityHint` makes "this much room, nothing in it"
/// explicit. Build one with [`reserve()`] or [`CapacityHint::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    /// Wrap a capacity to reserve.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The capacity to reserve.
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`CapacityHint::new`].
///
/// ```
/// use dynarr_core::reserve;
///
/// assert_eq!(reserve(16).capacity(), 16);
/// ```
pub const fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}
