use std::mem;
use std::ops::{Index, IndexMut};

use dynarr_core::ArrayError;

/// A fixed-length, exclusively-owned run of `T` slots.
///
/// Every slot always holds a valid `T`; a fresh buffer holds `T::default()`
/// in each one. A zero-length buffer owns no heap memory and is the state
/// left behind by [`release`](Self::release) and `std::mem::take`.
///
/// Indexing checks only that the buffer is non-empty, and only in debug
/// builds; the slice bound check still applies. Tracking which slots are
/// meaningful is the owner's job.
#[derive(Debug)]
pub struct RawBuffer<T> {
    slots: Box<[T]>,
}

impl<T> RawBuffer<T> {
    /// A buffer with no slots and no allocation.
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots, live or not.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots, live or not.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Give up the storage, leaving this buffer empty.
    ///
    /// The returned box carries every slot; dropping it releases them.
    pub fn release(&mut self) -> Box<[T]> {
        mem::take(&mut self.slots)
    }

    /// Consume the buffer and return its storage.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }

    /// Exchange storage with `other`. No element moves.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T: Default> RawBuffer<T> {
    /// Allocate `count` default-constructed slots.
    ///
    /// `count == 0` allocates nothing.
    ///
    /// # Panics
    ///
    /// Panics if `count` slots of `T` exceed `isize::MAX` bytes, or if
    /// `T::default()` panics (the partly built storage is dropped first).
    pub fn new(count: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(T::default).take(count).collect(),
        }
    }

    /// Allocate `count` default-constructed slots, reporting failure.
    ///
    /// Returns [`ArrayError::CapacityOverflow`] when the byte size is not
    /// representable and [`ArrayError::AllocationFailed`] when the
    /// allocator refuses the request.
    pub fn try_new(count: usize) -> Result<Self, ArrayError> {
        check_layout::<T>(count)?;
        let mut slots = Vec::new();
        if slots.try_reserve_exact(count).is_err() {
            log::debug!("buffer allocation of {count} slots failed");
            return Err(ArrayError::AllocationFailed { requested: count });
        }
        slots.resize_with(count, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}

/// Reject counts whose byte size exceeds `isize::MAX`.
fn check_layout<T>(count: usize) -> Result<(), ArrayError> {
    let elem = mem::size_of::<T>();
    if elem != 0 && count > isize::MAX as usize / elem {
        log::debug!("buffer of {count} slots of {elem} bytes overflows");
        return Err(ArrayError::CapacityOverflow {
            requested: Some(count),
        });
    }
    Ok(())
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for RawBuffer<T> {
    fn from(slots: Box<[T]>) -> Self {
        Self { slots }
    }
}

impl<T> From<Vec<T>> for RawBuffer<T> {
    fn from(slots: Vec<T>) -> Self {
        Self {
            slots: slots.into_boxed_slice(),
        }
    }
}

impl<T> Index<usize> for RawBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(!self.slots.is_empty(), "indexing an empty RawBuffer");
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for RawBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(!self.slots.is_empty(), "indexing an empty RawBuffer");
        &mut self.slots[index]
    }
}
