//! Centralized defaults for hypervector generation.
//!
//! Changing a default here affects the benchmark and
//! `MemoryConfig::default()` together.

use crate::error::{addressable, non_negative, HdcResult};
use crate::item_memory::{random_item_memory, ItemMemory};
use crate::rng::seeded_stream;

/// Dimensionality used when the caller does not pick one. 10K is the
/// customary size for binary HDC experiments.
pub const DEFAULT_DIMENSIONS: usize = 10_000;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// The two values a binary hypervector component can take, in draw order
/// (`false` maps to the first, `true` to the second).
pub const BINARY_ALPHABET: [i16; 2] = [0, 1];

/// Validated parameters for one item memory.
///
/// Only [`MemoryConfig::new`] and `Default` construct one, so a value of this
/// type always describes a shape that can be allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    seed: u64,
    dimensions: usize,
    count: usize,
}

impl MemoryConfig {
    pub fn new(seed: u64, dimensionality: i64, count: i64) -> HdcResult<Self> {
        let dimensions = non_negative("dimensionality", dimensionality)?;
        let count = non_negative("count", count)?;
        addressable("count", count, dimensions)?;
        Ok(Self {
            seed,
            dimensions,
            count,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Draw the item memory described by this config.
    pub fn generate(&self) -> ItemMemory {
        let mut rng = seeded_stream(self.seed);
        random_item_memory(self.dimensions, self.count, &mut rng)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            dimensions: DEFAULT_DIMENSIONS,
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HdcError;

    #[test]
    fn default_uses_crate_defaults() {
        let cfg = MemoryConfig::default();
        assert_eq!(cfg.seed(), DEFAULT_SEED);
        assert_eq!(cfg.dimensions(), DEFAULT_DIMENSIONS);
        assert_eq!(cfg.count(), 0);
        assert_eq!(cfg.generate().dim(), (0, DEFAULT_DIMENSIONS));
    }

    #[test]
    fn new_accepts_valid_shape() {
        let cfg = MemoryConfig::new(7, 4, 3).unwrap();
        assert_eq!((cfg.seed(), cfg.dimensions(), cfg.count()), (7, 4, 3));
        assert_eq!(cfg.generate().dim(), (3, 4));
    }

    #[test]
    fn new_rejects_negative_inputs() {
        assert!(MemoryConfig::new(7, -4, 3).is_err());
        assert!(MemoryConfig::new(7, 4, -3).is_err());
    }

    #[test]
    fn new_rejects_oversized_tables() {
        let err = MemoryConfig::new(7, i64::MAX, 4).unwrap_err();
        assert!(matches!(err, HdcError::InvalidArgument { name: "count", .. }));
    }

    #[test]
    fn new_rejects_tables_whose_bytes_overflow() {
        // 2^62 elements fit in isize, but 2^63 bytes of i16 do not.
        assert!(MemoryConfig::new(0, 1 << 62, 1).is_err());
        assert!(MemoryConfig::new(0, 1 << 31, 1 << 31).is_err());
    }

    #[test]
    fn zero_width_tables_may_have_many_rows() {
        let cfg = MemoryConfig::new(0, 0, i64::MAX).unwrap();
        assert_eq!(cfg.count(), i64::MAX as usize);
    }
}
