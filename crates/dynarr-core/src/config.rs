//! Growth configuration.

use crate::error::{ArrayError, ConfigError};

/// How a full array picks its next capacity.
///
/// An empty (zero-capacity) array grows to `min_capacity`; any other array
/// grows to `capacity * factor`. The default policy doubles, starting from
/// one slot, which keeps a run of N appends at O(N) element moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Multiplier applied to a non-zero capacity. Default: 2.
    ///
    /// Must be at least 2.
    pub factor: usize,

    /// Capacity chosen when growing from zero. Default: 1.
    ///
    /// Must be at least 1.
    pub min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth multiplier.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity of the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// The doubling policy used by every array unless told otherwise.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Build a policy and validate it.
    pub fn new(factor: usize, min_capacity: usize) -> Result<Self, ConfigError> {
        let policy = Self {
            factor,
            min_capacity,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check the policy's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factor < 2 {
            return Err(ConfigError::FactorTooSmall {
                factor: self.factor,
            });
        }
        if self.min_capacity == 0 {
            return Err(ConfigError::ZeroMinCapacity);
        }
        Ok(())
    }

    /// Capacity to grow to when an array of capacity `current` is full.
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if the product does not fit
    /// in a `usize`.
    pub fn next_capacity(&self, current: usize) -> Result<usize, ArrayError> {
        if current == 0 {
            return Ok(self.min_capacity);
        }
        current
            .checked_mul(self.factor)
            .ok_or(ArrayError::CapacityOverflow { requested: None })
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_doubles_from_one() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0), Ok(1));
        assert_eq!(policy.next_capacity(1), Ok(2));
        assert_eq!(policy.next_capacity(8), Ok(16));
    }

    #[test]
    fn custom_policy_applies_factor_and_floor() {
        let policy = GrowthPolicy::new(3, 4).unwrap();
        assert_eq!(policy.next_capacity(0), Ok(4));
        assert_eq!(policy.next_capacity(4), Ok(12));
    }

    #[test]
    fn rejects_non_growing_factor() {
        assert_eq!(
            GrowthPolicy::new(1, 1),
            Err(ConfigError::FactorTooSmall { factor: 1 })
        );
        assert_eq!(
            GrowthPolicy::new(0, 1),
            Err(ConfigError::FactorTooSmall { factor: 0 })
        );
    }

    #[test]
    fn rejects_zero_min_capacity() {
        assert_eq!(GrowthPolicy::new(2, 0), Err(ConfigError::ZeroMinCapacity));
    }

    #[test]
    fn overflow_is_reported() {
        let policy = GrowthPolicy::default();
        assert_eq!(
            policy.next_capacity(usize::MAX / 2 + 1),
            Err(ArrayError::CapacityOverflow { requested: None })
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_policies_always_grow(
                factor in 2usize..8,
                min_capacity in 1usize..64,
                current in 0usize..1_000_000,
            ) {
                let policy = GrowthPolicy::new(factor, min_capacity).unwrap();
                let next = policy.next_capacity(current).unwrap();
                prop_assert!(next > current);
            }
        }
    }
}
