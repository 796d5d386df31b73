//! Error types for dynarr.
//!
//! Two enums: [`ArrayError`] for reported failures of container operations
//! and [`ConfigError`] for rejected [`GrowthPolicy`](crate::GrowthPolicy)
//! values. Precondition violations (unchecked indexing, popping an empty
//! array) are not errors and never appear here.

use std::error::Error;
use std::fmt;

/// Recoverable failures reported by container operations.
///
/// Every operation that returns one of these leaves the container exactly
/// as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked element access with an index at or past the end.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of present elements at the time of the call.
        len: usize,
    },
    /// An insert or erase position outside the valid range.
    ///
    /// Insert accepts `0..=len`, erase accepts `0..len`.
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// Number of present elements at the time of the call.
        len: usize,
    },
    /// The requested capacity cannot be represented for the element type.
    CapacityOverflow {
        /// Capacity that was asked for, if it could be computed.
        requested: Option<usize>,
    },
    /// The allocator refused to provide storage.
    AllocationFailed {
        /// Capacity (in elements) that could not be allocated.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, len {len}")
            }
            Self::PositionOutOfRange { position, len } => {
                write!(f, "position out of range: position {position}, len {len}")
            }
            Self::CapacityOverflow {
                requested: Some(requested),
            } => {
                write!(f, "capacity overflow: requested {requested} elements")
            }
            Self::CapacityOverflow { requested: None } => {
                write!(f, "capacity overflow")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} elements")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors detected by [`GrowthPolicy::validate()`](crate::GrowthPolicy::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The growth factor would not grow a full array.
    FactorTooSmall {
        /// The configured factor.
        factor: usize,
    },
    /// Growing from zero capacity would still leave zero capacity.
    ZeroMinCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactorTooSmall { factor } => {
                write!(f, "growth factor {factor} is below the minimum of 2")
            }
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_messages_name_both_values() {
        let err = ArrayError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index out of range: index 7, len 3");

        let err = ArrayError::PositionOutOfRange {
            position: 5,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "position out of range: position 5, len 4"
        );
    }

    #[test]
    fn capacity_overflow_without_request() {
        let err = ArrayError::CapacityOverflow { requested: None };
        assert_eq!(err.to_string(), "capacity overflow");
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<ArrayError>();
        assert_error::<ConfigError>();
    }
}
