//! A growable, contiguous, random-access dynamic array.
//!
//! [`DynamicArray`] tracks a logical length over an exclusively-owned
//! [`RawBuffer`](dynarr_buffer::RawBuffer) whose slot count is the array's
//! capacity. Slots past the length exist physically, so appends up to the
//! capacity never reallocate.
//!
//! # Layout
//!
//! ```text
//! DynamicArray<T>
//! ├── len                       present elements: slots [0, len)
//! ├── policy: GrowthPolicy      0 → min_capacity, c → c * factor
//! └── buffer: RawBuffer<T>      capacity == buffer.len()
//!     └── [ e0 | e1 | … | e(len-1) | stale … ]
//! ```
//!
//! # Failure classes
//!
//! - **Reported:** [`at`](DynamicArray::at), [`insert`](DynamicArray::insert),
//!   [`erase`](DynamicArray::erase) and the `try_*` growth methods return
//!   [`ArrayError`](dynarr_core::ArrayError) and leave the array untouched.
//! - **Precondition:** `array[i]` with `i >= len` and
//!   [`pop_back`](DynamicArray::pop_back) on an empty array are caller bugs.
//!   Debug builds assert; release builds do not check against `len`.
//!
//! Every reallocation builds the replacement buffer completely before the
//! old one is touched, so a panic in `T::default()` or `T::clone()` leaves
//! the array as it was.
//!
//! Slices and iterators borrowed from an array are invalidated by any
//! operation that reallocates, inserts, erases, or resizes; the borrow
//! checker enforces this statically.
//!
//! An iterator cannot be held across a mutation:
//!
//! ```compile_fail
//! use dynarr_array::dynarr;
//!
//! let mut arr = dynarr![1, 2, 3];
//! let iter = arr.iter();
//! arr.push_back(4);
//! let _ = iter.count();
//! ```
//!
//! Nor can an element reference:
//!
//! ```compile_fail
//! use dynarr_array::dynarr;
//!
//! let mut arr = dynarr![1, 2, 3];
//! let first = &arr[0];
//! arr.insert(0, 0).unwrap();
//! assert_eq!(*first, 1);
//! ```
//!
//! Once the borrow ends, the array is free to reallocate:
//!
//! ```
//! use dynarr_array::dynarr;
//!
//! let mut arr = dynarr![1, 2, 3];
//! let first = arr[0];
//! arr.push_back(4);
//! assert_eq!(first, 1);
//! assert_eq!(arr.capacity(), 6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod array;
mod cmp;
mod iter;
mod macros;

pub use array::DynamicArray;
