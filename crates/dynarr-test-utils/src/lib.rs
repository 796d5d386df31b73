//! Instrumented element types for dynarr development.
//!
//! Each type implements the traits the containers require (`Default`,
//! `Clone`) and records or sabotages those calls so tests can observe
//! ownership transfer and failure safety:
//!
//! - [`DropCounter`] — counts drops through a shared counter.
//! - [`FaultyClone`] — panics once a shared clone budget runs out.
//! - [`FaultyDefault`] — panics once an armed default-construction budget
//!   runs out.
//! - [`NonCopy`] — a heap-owning value, for checking moves versus copies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ArmGuard, DropCounter, FaultyClone, FaultyDefault, NonCopy};

use std::panic::{self, AssertUnwindSafe};

/// Run `f` and report whether it panicked.
///
/// The closure is wrapped in [`AssertUnwindSafe`]; callers assert on the
/// state of anything it touched afterwards.
pub fn panics<F: FnOnce()>(f: F) -> bool {
    panic::catch_unwind(AssertUnwindSafe(f)).is_err()
}
