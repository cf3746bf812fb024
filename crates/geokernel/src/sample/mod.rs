//! Uniform spatial samplers over canonical shapes.
//!
//! Purpose
//! - Draw i.i.d. points uniformly distributed over a shape in the sampler's
//!   local frame, then translate by a fixed offset (default zero).
//! - Streams are reproducible: `set_seed` restarts, `reset` rewinds to the last
//!   seed, and the same seed always gives the same sequence of draws.
//!
//! Model
//! - Each variant only implements `sample_local` (the shape's sampling law);
//!   `next_point` and `next_vector` both wrap that single draw, so calling
//!   either advances the engine identically.
//! - Every sampler owns a private `RandomEngine` inside its `SamplerCore`.
//!   Drawing takes `&mut self`; share one instance across threads only behind
//!   a lock.
//! - Shape setters reject negative or non-finite parameters immediately with
//!   `GeomError::InvalidParameter`.
//!
//! Sampling laws (U ~ uniform [0,1), C ~ uniform [-0.5,0.5))
//! - Box / rectangle: extent × C per axis (rectangle keeps z = 0).
//! - Circle: θ = 2πU, `(r cos θ, r sin θ, 0)`.
//! - Disk: ρ = r √U, θ = 2πU (√ keeps area density uniform).
//! - Line: `start + U (end - start)`, half-open at `end`.
//! - Cylinder volume: ρ = r √U, θ = 2πU, z = h C.
//! - Cylinder mantle: θ = 2πU, z = h C, ρ = r.
//! - Sphere volume: elevation = asin(2U − 1), azimuth = 2πU, ρ = r U^{1/3}.
//! - Sphere surface: z = r (1 − 2U), planar radius r √(1 − z²/r²), azimuth 2πU.

mod curve;
mod planar;
mod solid;
mod spec;

pub use curve::{Curve, RandomCurve, RandomLine};
pub use planar::{RandomCircle, RandomDisk, RandomRectangle};
pub use solid::{RandomBox, RandomInCylinder, RandomInSphere, RandomOnCylinder, RandomOnSphere};
pub use spec::{SamplerShape, SamplerSpec};

use nalgebra::Vector3;

use crate::coord::{Coord, Coord3, MutCoord};
use crate::rng::RandomEngine;

/// State every sampler carries: its engine and the translation applied after
/// shape sampling.
#[derive(Debug, Default)]
pub struct SamplerCore {
    engine: RandomEngine,
    offset: Coord,
}

impl SamplerCore {
    /// Entropy-seeded engine, zero offset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            engine: RandomEngine::with_seed(seed),
            offset: Coord::zero(),
        }
    }

    #[inline]
    pub fn engine(&mut self) -> &mut RandomEngine {
        &mut self.engine
    }
}

/// Common sampler contract.
pub trait RandomPoint {
    /// One draw from the shape in the local frame, before the offset.
    fn sample_local(&mut self) -> Vector3<f64>;

    fn core(&self) -> &SamplerCore;

    fn core_mut(&mut self) -> &mut SamplerCore;

    /// Next sample as a position.
    fn next_point(&mut self) -> Coord {
        let local = self.sample_local();
        Coord::from(local + self.core().offset.to_vector3())
    }

    /// Next sample as a mutable vector (same draw law and stream as `next_point`).
    fn next_vector(&mut self) -> MutCoord {
        let local = self.sample_local();
        MutCoord::from(local + self.core().offset.to_vector3())
    }

    /// `n` consecutive points.
    fn points(&mut self, n: usize) -> Vec<Coord> {
        (0..n).map(|_| self.next_point()).collect()
    }

    fn seed(&self) -> u64 {
        self.core().engine.seed()
    }

    fn set_seed(&mut self, seed: u64) {
        self.core_mut().engine.set_seed(seed);
    }

    fn reset(&mut self) {
        self.core_mut().engine.reset();
    }

    fn offset(&self) -> Coord {
        self.core().offset
    }

    /// Replace (not accumulate) the offset.
    fn set_offset(&mut self, offset: Coord) {
        self.core_mut().offset = offset;
    }

    fn set_offset_2d(&mut self, x: f64, y: f64) {
        self.set_offset(Coord::new(x, y, 0.0));
    }

    fn set_offset_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.set_offset(Coord::new(x, y, z));
    }
}

#[cfg(test)]
mod tests;
