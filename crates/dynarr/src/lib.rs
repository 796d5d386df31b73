//! dynarr: a growable, contiguous, random-access dynamic array.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates. For most users, adding `dynarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! // Reserve room for four elements without creating any.
//! let mut arr: DynamicArray<i32> = DynamicArray::from(reserve(4));
//! assert_eq!((arr.len(), arr.capacity()), (0, 4));
//!
//! for i in 1..=4 {
//!     arr.push_back(i);
//! }
//! assert_eq!(arr.capacity(), 4);
//!
//! // A fifth element doubles the capacity.
//! arr.push_back(5);
//! assert_eq!(arr.capacity(), 8);
//!
//! // Checked access reports instead of panicking.
//! assert_eq!(
//!     arr.at(9),
//!     Err(ArrayError::IndexOutOfRange { index: 9, len: 5 })
//! );
//!
//! arr.erase(0).unwrap();
//! assert_eq!(arr, dynarr![2, 3, 4, 5]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dynarr-core` | Errors, `CapacityHint`, `GrowthPolicy` |
//! | [`buffer`] | `dynarr-buffer` | `RawBuffer`, the owned slot storage |
//! | [`array`] | `dynarr-array` | `DynamicArray` and the `dynarr!` macro |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: errors, capacity hints, and growth configuration (`dynarr-core`).
pub use dynarr_core as types;

/// Exclusively-owned slot storage (`dynarr-buffer`).
///
/// Most users never touch [`buffer::RawBuffer`] directly; it is public for
/// callers that want to transplant storage between owners.
pub use dynarr_buffer as buffer;

/// The dynamic array itself (`dynarr-array`).
pub use dynarr_array as array;

pub use dynarr_array::{dynarr, DynamicArray};
pub use dynarr_buffer::RawBuffer;
pub use dynarr_core::{reserve, ArrayError, CapacityHint, ConfigError, GrowthPolicy};

/// Common imports for working with dynarr.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
pub mod prelude {
    pub use dynarr_array::{dynarr, DynamicArray};
    pub use dynarr_core::{reserve, ArrayError, CapacityHint, GrowthPolicy};
}
