use tracing::trace;

use super::{Map2, Map3};
use crate::coord::Coord;
use crate::error::GeomError;
use crate::transform::Transform3;

/// Mapping backed by an affine transform and its precomputed inverse.
#[derive(Clone, Debug)]
pub struct TransformMap {
    forward: Transform3,
    inverse: Transform3,
}

impl TransformMap {
    /// Fails with `DegenerateTransform` if `forward` is not invertible.
    pub fn new(forward: Transform3) -> Result<Self, GeomError> {
        let inverse = forward.try_inverse()?;
        trace!(det = forward.determinant(), "transform map built");
        Ok(Self { forward, inverse })
    }

    /// Caller guarantees `inverse` undoes `forward` (e.g. orthonormal frames).
    pub(crate) fn from_pair(forward: Transform3, inverse: Transform3) -> Self {
        Self { forward, inverse }
    }

    pub fn identity() -> Self {
        Self {
            forward: Transform3::identity(),
            inverse: Transform3::identity(),
        }
    }

    pub fn forward(&self) -> &Transform3 {
        &self.forward
    }

    pub fn inverse(&self) -> &Transform3 {
        &self.inverse
    }

    /// The map with forward and inverse swapped.
    pub fn inverted(&self) -> Self {
        Self {
            forward: self.inverse,
            inverse: self.forward,
        }
    }

    /// Apply `self`, then `next`; both inverses are already known.
    pub fn then(&self, next: &TransformMap) -> Self {
        Self {
            forward: self.forward.then(&next.forward),
            inverse: next.inverse.then(&self.inverse),
        }
    }
}

impl Default for TransformMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl Map3 for TransformMap {
    fn map_point(&self, p: Coord) -> Coord {
        self.forward.apply_as_point(&p)
    }
    fn unmap_point(&self, p: Coord) -> Coord {
        self.inverse.apply_as_point(&p)
    }
    fn map_vector(&self, v: Coord) -> Coord {
        self.forward.apply_as_vector(&v)
    }
    fn unmap_vector(&self, v: Coord) -> Coord {
        self.inverse.apply_as_vector(&v)
    }
}

impl Map2 for TransformMap {}
