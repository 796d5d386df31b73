//! Core types for the dynarr container family.
//!
//! Holds the pieces shared by `dynarr-buffer` and `dynarr-array`: the
//! error enums, the [`CapacityHint`] value used to request reserved
//! capacity, and the [`GrowthPolicy`] that decides how much a full array
//! grows by.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod hint;

pub use config::GrowthPolicy;
pub use error::{ArrayError, ConfigError};
pub use hint::{reserve, CapacityHint};
