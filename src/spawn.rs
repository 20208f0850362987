//! Random placement for new boids.

use crate::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Context used to place one boid, with its own seeded RNG.
///
/// ```ignore
/// let mut ctx = SpawnContext::new(i, seed);
/// let boid = Boid::new(ctx.random_center(bounds), ctx.random_heading(), &config);
/// ```
pub struct SpawnContext {
    /// Registry index the boid will receive.
    pub index: u32,
    rng: SmallRng,
}

impl SpawnContext {
    /// Context for boid `index`. The same `(seed, index)` always
    /// places the boid the same way.
    pub fn new(index: u32, seed: u64) -> Self {
        Self {
            index,
            rng: SmallRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        }
    }

    /// Uniform point in `[0, width] x [0, height]`.
    pub fn random_center(&mut self, bounds: Vec2) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..=bounds.x.max(0.0)),
            self.rng.gen_range(0.0..=bounds.y.max(0.0)),
        )
    }

    /// Uniform heading in `[0, 2π)`.
    pub fn random_heading(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }
}

/// Seed derived from the wall clock, for runs without a fixed seed.
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
