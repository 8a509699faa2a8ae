//! RNG module - the injectable random source for pipe spawning
//!
//! Sessions are generic over any [`rand::Rng`]. The game itself runs on a
//! ChaCha8 stream, either from a fixed seed (reproducible runs) or from OS
//! entropy. Tests can substitute `rand::rngs::mock::StepRng` for fixed draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default generator type for sessions.
pub type GameRng = ChaCha8Rng;

/// Deterministic generator for the given seed.
pub fn seeded(seed: u64) -> GameRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
pub fn from_entropy() -> GameRng {
    ChaCha8Rng::from_entropy()
}

/// Uniform draw in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>()
}

/// Bernoulli trial: `true` with probability `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    unit(rng) < p
}
