//! Seeded random streams shared by every generator in the crate.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Open a fresh deterministic stream for `seed`.
///
/// Pass the returned generator by `&mut` into the `random_*` functions to
/// draw several vectors progressively from one stream.
pub fn seeded_stream(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
