//! Random binary hypervectors.
//!
//! Every component is drawn independently and uniformly from {0, 1}. In high
//! dimensions two such vectors disagree in roughly half their positions, which
//! is what makes them usable as quasi-orthogonal atomic symbols.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::BINARY_ALPHABET;
use crate::error::{addressable, non_negative, HdcResult};
use crate::rng::seeded_stream;

/// A binary hypervector. Components are stored as small integers (0 or 1).
pub type Hypervector = Array1<i16>;

/// Draw a binary hypervector of length `dimensions` from a live generator.
///
/// The generator is advanced by exactly `dimensions` draws, so successive calls
/// on the same generator continue the same stream.
pub fn random_binary_vector(dimensions: usize, rng: &mut StdRng) -> Hypervector {
    Array1::from_iter((0..dimensions).map(|_| random_component(rng)))
}

/// One component, consuming exactly one draw from `rng`.
pub(crate) fn random_component(rng: &mut StdRng) -> i16 {
    let [zero, one] = BINARY_ALPHABET;
    if rng.gen::<bool>() {
        one
    } else {
        zero
    }
}

/// Draw a binary hypervector from a fresh stream seeded with `seed`.
pub fn random_binary_vector_from_seed(dimensions: usize, seed: u64) -> Hypervector {
    let mut rng = seeded_stream(seed);
    random_binary_vector(dimensions, &mut rng)
}

/// Generate one binary hypervector of the requested dimensionality.
///
/// Fails with [`HdcError::InvalidArgument`](crate::HdcError) when
/// `dimensionality` is negative or too large to allocate. A dimensionality of
/// zero yields an empty vector.
pub fn generate_vector(seed: u64, dimensionality: i64) -> HdcResult<Hypervector> {
    let dimensions = non_negative("dimensionality", dimensionality)?;
    addressable("dimensionality", 1, dimensions)?;
    Ok(random_binary_vector_from_seed(dimensions, seed))
}
