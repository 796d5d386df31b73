//! Iteration and conversions.

use dynarr_buffer::RawBuffer;
use dynarr_core::GrowthPolicy;

use crate::DynamicArray;

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the present elements; stale slots are dropped up front.
    fn into_iter(self) -> Self::IntoIter {
        let (buffer, len) = self.into_parts();
        let mut slots = buffer.into_boxed_slice().into_vec();
        slots.truncate(len);
        slots.into_iter()
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    /// Appends each item with [`push_back`](DynamicArray::push_back).
    ///
    /// When the iterator's lower size bound does not fit, the array grows
    /// once up front to the larger of that bound and the policy's next
    /// capacity, so repeated small extends still grow geometrically.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len().saturating_add(lower);
        if needed > self.capacity() {
            match self.policy().next_capacity(self.capacity()) {
                Ok(grown) => self.reserve(needed.max(grown)),
                Err(err) => panic!("extend: {err}"),
            }
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Default> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Length and capacity both equal `N`.
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    /// Length and capacity both equal `items.len()`.
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Self::from_parts(RawBuffer::from(items), len, GrowthPolicy::DOUBLING)
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
