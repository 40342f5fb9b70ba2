//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}
