//! Session RNG resource.
//!
//! Wraps `ChaCha8Rng` so every random draw in the planner comes from one
//! seeded source. Systems take `ResMut<PlannerRng>` instead of calling
//! `rand::thread_rng()`, which keeps a session reproducible from its seed.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;

/// Deterministic RNG resource for design synthesis.
#[derive(Resource)]
pub struct PlannerRng(pub ChaCha8Rng);

impl Default for PlannerRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl PlannerRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Derive an independent generator for work that runs off the main thread.
    ///
    /// Advances the session stream by one draw, so consecutive forks differ.
    pub fn fork(&mut self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0.gen())
    }
}
