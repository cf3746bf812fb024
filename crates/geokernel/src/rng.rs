//! Seedable, rewindable uniform engine.
//!
//! Model
//! - A `StdRng` stream plus the seed that produced it. `reset` re-seeds from
//!   the stored seed, so N draws after `reset` repeat the N draws made after the
//!   last `set_seed` (or construction).
//! - Not `Clone`: each sampler owns its engine; sharing one would let another
//!   owner advance the stream and break replay.
//! - Non-cryptographic. Streams are stable for a given `rand` version only.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct RandomEngine {
    seed: u64,
    rng: StdRng,
}

impl RandomEngine {
    /// Engine seeded from OS entropy (not reproducible across runs, but
    /// `reset` still rewinds within this instance).
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed of the current stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replace the seed and restart the stream.
    pub fn set_seed(&mut self, seed: u64) {
        tracing::trace!(seed, "engine reseeded");
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Rewind to the state right after the last seeding.
    pub fn reset(&mut self) {
        tracing::trace!(seed = self.seed, "engine reset");
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform in `[-0.5, 0.5)`.
    #[inline]
    pub fn next_centered_f64(&mut self) -> f64 {
        self.next_f64() - 0.5
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}
