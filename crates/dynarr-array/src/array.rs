use std::mem;
use std::ops::{Index, IndexMut};

use dynarr_buffer::RawBuffer;
use dynarr_core::{ArrayError, CapacityHint, ConfigError, GrowthPolicy};

/// A growable contiguous array with explicit capacity management.
///
/// Invariant: `len <= capacity`, where capacity is the slot count of the
/// owned buffer. Slots `[len, capacity)` hold stale or default values and
/// are never observable through the safe accessors.
///
/// ```
/// use dynarr_array::dynarr;
///
/// let mut arr = dynarr![2, 3, 4];
/// arr.insert(0, 1).unwrap();
/// assert_eq!(arr, [1, 2, 3, 4]);
/// assert_eq!(arr.capacity(), 6);
/// ```
pub struct DynamicArray<T> {
    buffer: RawBuffer<T>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// An empty array. Allocates nothing.
    pub fn new() -> Self {
        Self {
            buffer: RawBuffer::empty(),
            len: 0,
            policy: GrowthPolicy::DOUBLING,
        }
    }

    /// An empty array that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self {
            buffer: RawBuffer::empty(),
            len: 0,
            policy,
        })
    }

    pub(crate) fn from_parts(buffer: RawBuffer<T>, len: usize, policy: GrowthPolicy) -> Self {
        debug_assert!(len <= buffer.len());
        Self {
            buffer,
            len,
            policy,
        }
    }

    pub(crate) fn into_parts(self) -> (RawBuffer<T>, usize) {
        (self.buffer, self.len)
    }

    /// Number of present elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no elements are present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth policy this array uses.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The present elements.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// The present elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.len]
    }

    /// Pointer to the first slot.
    ///
    /// Changes exactly when the array reallocates, which makes it useful
    /// for observing growth. Dangling (but non-null) while capacity is 0.
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_slice().as_ptr()
    }

    /// Iterate over the present elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the present elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Whether some present element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Bounds-checked access.
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(&self.buffer[index])
    }

    /// Bounds-checked mutable access.
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(&mut self.buffer[index])
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            log::debug!("at: index {index} out of range for len {}", self.len);
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Remove the last element by shrinking the length.
    ///
    /// The vacated slot keeps its value until it is overwritten or the
    /// buffer is dropped.
    ///
    /// Precondition: the array is non-empty. Debug builds assert; release
    /// builds leave an empty array unchanged.
    pub fn pop_back(&mut self) {
        debug_assert!(self.len > 0, "pop_back on an empty DynamicArray");
        self.len = self.len.saturating_sub(1);
    }

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// Returns `index`, which now holds the element that followed the
    /// removed one (or equals the new length). Returns
    /// [`ArrayError::PositionOutOfRange`] unless `index < len`.
    pub fn erase(&mut self, index: usize) -> Result<usize, ArrayError> {
        let len = self.len;
        if index >= len {
            log::debug!("erase: position {index} out of range for len {len}");
            return Err(ArrayError::PositionOutOfRange {
                position: index,
                len,
            });
        }
        // The erased value travels to slot `len - 1`, now logically absent.
        self.buffer.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        Ok(index)
    }

    /// Set the length to zero. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchange contents, capacity, and policy with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.policy, &mut other.policy);
    }

    /// Move the contents out, leaving this array empty with zero capacity.
    ///
    /// The growth policy stays with `self`.
    pub fn take(&mut self) -> Self {
        let len = mem::take(&mut self.len);
        Self {
            buffer: mem::take(&mut self.buffer),
            len,
            policy: self.policy,
        }
    }

    /// Replace the buffer with `fresh`, carrying the present elements over.
    ///
    /// `fresh` must be fully built; nothing here can fail.
    fn adopt(&mut self, mut fresh: RawBuffer<T>) {
        let len = self.len;
        debug_assert!(fresh.len() >= len);
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.buffer.as_mut_slice()[..len]);
        log::trace!(
            "reallocated: capacity {} -> {} (len {len})",
            self.buffer.len(),
            fresh.len()
        );
        self.buffer = fresh;
    }
}

impl<T: Default> DynamicArray<T> {
    /// `len` default-valued elements; capacity equals `len`.
    pub fn with_len(len: usize) -> Self {
        Self::from_parts(RawBuffer::new(len), len, GrowthPolicy::DOUBLING)
    }

    /// An empty array with `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(RawBuffer::new(capacity), 0, GrowthPolicy::DOUBLING)
    }

    /// Grow capacity to at least `new_capacity`.
    ///
    /// A no-op when `new_capacity <= capacity`. The length is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.adopt(RawBuffer::new(new_capacity));
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// On error the array is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity > self.capacity() {
            self.adopt(RawBuffer::try_new(new_capacity)?);
        }
        Ok(())
    }

    /// Append `value`, growing by the policy when full.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            match self.policy.next_capacity(self.capacity()) {
                Ok(capacity) => self.reserve(capacity),
                Err(err) => panic!("push_back: {err}"),
            }
        }
        self.buffer[self.len] = value;
        self.len += 1;
    }

    /// Fallible [`push_back`](Self::push_back).
    ///
    /// On error `value` is dropped and the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            let capacity = self.policy.next_capacity(self.capacity())?;
            self.try_reserve(capacity)?;
        }
        self.buffer[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// `index` may equal `len`, which appends. Returns `index`. Returns
    /// [`ArrayError::PositionOutOfRange`] for `index > len`, or a growth
    /// error if a full array cannot be reallocated; in both cases the
    /// array is unchanged and `value` is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError> {
        let len = self.len;
        if index > len {
            log::debug!("insert: position {index} out of range for len {len}");
            return Err(ArrayError::PositionOutOfRange {
                position: index,
                len,
            });
        }

        if len == self.capacity() {
            // Lay the elements out around the gap directly in the new buffer.
            let mut fresh = RawBuffer::try_new(self.policy.next_capacity(len)?)?;
            let old = self.buffer.as_mut_slice();
            let new = fresh.as_mut_slice();
            new[..index].swap_with_slice(&mut old[..index]);
            new[index] = value;
            new[index + 1..=len].swap_with_slice(&mut old[index..len]);
            log::trace!("reallocated: capacity {len} -> {} (len {len})", fresh.len());
            self.buffer = fresh;
        } else {
            let slots = self.buffer.as_mut_slice();
            // Shift [index, len) right by one; the stale slot lands on `index`.
            slots[index..=len].rotate_right(1);
            slots[index] = value;
        }

        self.len += 1;
        Ok(index)
    }

    /// Change the length to `new_len`.
    ///
    /// Shrinking only lowers the length. Growing fills the new positions
    /// with `T::default()`, reallocating to exactly `new_len` slots if the
    /// capacity is too small.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            // Fresh slots are already default-valued.
            self.adopt(RawBuffer::new(new_len));
        } else if new_len > self.len {
            self.buffer.as_mut_slice()[self.len..new_len].fill_with(T::default);
        }
        self.len = new_len;
    }

    /// Fallible [`resize`](Self::resize).
    ///
    /// On error the array is unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len > self.capacity() {
            self.adopt(RawBuffer::try_new(new_len)?);
        } else if new_len > self.len {
            self.buffer.as_mut_slice()[self.len..new_len].fill_with(T::default);
        }
        self.len = new_len;
        Ok(())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// `len` copies of `value`; capacity equals `len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::from_parts(RawBuffer::from(vec![value; len]), len, GrowthPolicy::DOUBLING)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> From<CapacityHint> for DynamicArray<T> {
    fn from(hint: CapacityHint) -> Self {
        Self::with_capacity(hint.capacity())
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// Deep copy of the present elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut buffer = RawBuffer::new(self.capacity());
        buffer.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        Self::from_parts(buffer, self.len, self.policy)
    }

    /// Copy-assign: build the whole copy first, then swap it in.
    ///
    /// A panic while copying leaves `self` untouched. Assigning from an
    /// empty array clears `self` and keeps its storage. Either way `self`
    /// ends up with the source's growth policy.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            self.clear();
            self.policy = source.policy;
            return;
        }
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// Unchecked-length access.
    ///
    /// Precondition: `index < len`. Debug builds assert it; release builds
    /// only check against the capacity, so a stale slot may be returned.
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for len {}",
            self.len
        );
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for len {}",
            self.len
        );
        &mut self.buffer[index]
    }
}
