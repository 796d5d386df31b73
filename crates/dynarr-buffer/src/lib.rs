//! Exclusively-owned contiguous element storage.
//!
//! [`RawBuffer`] owns one boxed slice of default-constructed slots and
//! nothing else: it does not know how many of its slots its owner considers
//! live, so it cannot be cloned. Ownership moves between buffers in O(1)
//! via [`RawBuffer::swap`], [`RawBuffer::release`] or `std::mem::take`.
//!
//! ```text
//! RawBuffer<T>
//! └── Box<[T]>   (len == slots allocated; empty box == no allocation)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod buffer;

pub use buffer::RawBuffer;
