//! Workload generators for dynarr benchmarks.
//!
//! - [`edit_positions`]: deterministic pseudo-random insert/erase indices
//! - [`filled`]: an array of `0..len` at exactly `len` capacity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynamicArray;

/// `count` deterministic positions, each valid for an array whose length
/// starts at `start_len` and grows by one per position (insert workload).
pub fn edit_positions(start_len: usize, count: usize) -> Vec<usize> {
    (0..count as u64)
        .map(|i| {
            let bound = start_len as u64 + i + 1;
            (i.wrapping_mul(6364136223846793007).wrapping_add(1442695040888963407) >> 33) % bound
        })
        .map(|pos| pos as usize)
        .collect()
}

/// An array holding `0..len`, with capacity equal to `len`.
pub fn filled(len: usize) -> DynamicArray<u64> {
    (0..len as u64).collect()
}
