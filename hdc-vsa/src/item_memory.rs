//! Item memories: stacks of random binary hypervectors.
//!
//! All rows come from one seeded stream consumed progressively, row 0 first.
//! Row `i` is therefore the `i`-th vector drawn from that stream, and row 0 is
//! the same vector [`generate_vector`](crate::generate_vector) returns for the
//! seed. Rows are never reseeded individually.

use ndarray::Array2;
use rand::rngs::StdRng;

use crate::config::MemoryConfig;
use crate::error::HdcResult;
use crate::hypervector::random_component;

/// `count` binary hypervectors of equal dimensionality, one per row.
pub type ItemMemory = Array2<i16>;

/// Draw `count` hypervectors of length `dimensions` from a live generator and
/// stack them in draw order.
///
/// Zero-width rows consume nothing from `rng`.
pub fn random_item_memory(dimensions: usize, count: usize, rng: &mut StdRng) -> ItemMemory {
    let mut memory = ItemMemory::zeros((count, dimensions));
    if dimensions == 0 {
        return memory;
    }
    for mut row in memory.rows_mut() {
        row.map_inplace(|x| *x = random_component(rng));
    }
    memory
}

/// Generate an item memory of `count` rows and `dimensionality` columns.
///
/// Fails with [`HdcError::InvalidArgument`](crate::HdcError) when either size
/// is negative or the table is too large to allocate; nothing is generated in
/// that case.
pub fn generate_item_memory(seed: u64, dimensionality: i64, count: i64) -> HdcResult<ItemMemory> {
    let config = MemoryConfig::new(seed, dimensionality, count)?;
    log::debug!(
        "Generating item memory: {} x {} (seed={})",
        config.count(),
        config.dimensions(),
        config.seed()
    );
    Ok(config.generate())
}
