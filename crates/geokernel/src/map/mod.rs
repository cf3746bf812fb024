//! Coordinate mappings between a world frame and a local frame.
//!
//! Contract
//! - `map_*` sends world coordinates to local ones, `unmap_*` is its exact
//!   algebraic inverse: `unmap_point(map_point(p)) ≈ p` up to rounding.
//! - Points get the full affine map. Vectors are displacements and only see
//!   the linear part, so translation never touches them.
//! - The inverse is computed once when the map is built. A singular forward
//!   transform fails there with `GeomError::DegenerateTransform`.
//! - Maps are immutable after construction and can be shared freely across
//!   threads.
//!
//! `Map2` adds the planar view used to push sampled 3D points into a 2D
//! parameterization (and back), e.g. before handing sites to a Delaunay engine.

mod affine;
mod planar;

pub use affine::TransformMap;
pub use planar::{PlanarAxis, PlanarMap};

use crate::coord::{Coord, MutCoord};

pub trait Map3 {
    fn map_point(&self, p: Coord) -> Coord;
    fn unmap_point(&self, p: Coord) -> Coord;
    fn map_vector(&self, v: Coord) -> Coord;
    fn unmap_vector(&self, v: Coord) -> Coord;

    fn map_point_into(&self, p: Coord, out: &mut MutCoord) {
        out.set(&self.map_point(p));
    }
    fn unmap_point_into(&self, p: Coord, out: &mut MutCoord) {
        out.set(&self.unmap_point(p));
    }
    fn map_vector_into(&self, v: Coord, out: &mut MutCoord) {
        out.set(&self.map_vector(v));
    }
    fn unmap_vector_into(&self, v: Coord, out: &mut MutCoord) {
        out.set(&self.unmap_vector(v));
    }
}

/// Planar specialization: local `(u, v)` with the third component as height.
pub trait Map2: Map3 {
    /// Local `(u, v, 0)` back to world.
    fn unmap_point_2d(&self, u: f64, v: f64) -> Coord {
        self.unmap_point(Coord::new(u, v, 0.0))
    }
    fn unmap_vector_2d(&self, u: f64, v: f64) -> Coord {
        self.unmap_vector(Coord::new(u, v, 0.0))
    }
    /// World point to local `(u, v)`, dropping the height.
    fn map_point_2d(&self, p: Coord) -> [f64; 2] {
        let l = self.map_point(p);
        [l.x(), l.y()]
    }
    fn unmap_point_2d_into(&self, u: f64, v: f64, out: &mut MutCoord) {
        out.set(&self.unmap_point_2d(u, v));
    }
}
