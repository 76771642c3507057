//! Injected randomness capability.
//!
//! The environment never seeds or owns an ambient RNG; it draws through
//! this trait, injected at construction. Tests can substitute a scripted
//! source for fully deterministic episodes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform randomness source consumed by [`ParkingEnv::reset`].
///
/// [`ParkingEnv::reset`]: crate::env::ParkingEnv::reset
pub trait RandomSource {
    /// Uniform float in the half-open range `[min, max)`.
    fn rand_float(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in the inclusive range `[min, max]`.
    fn rand_int(&mut self, min: i32, max: i32) -> i32;
}

/// `SmallRng`-backed randomness source with deterministic seeding.
///
/// A seed of `0` uses entropy for non-deterministic behavior; any other
/// seed gives reproducible draws.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Create a new source from a seed (`0` = entropy).
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn rand_float(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    #[inline]
    fn rand_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}
