//! Coordinate algebra: two flavors of a 3-component coordinate.
//!
//! Purpose
//! - `Coord` is a value: every operation returns a new instance and `self` is
//!   never touched.
//! - `MutCoord` is a working register: `*_self` operations write in place and
//!   return `&mut Self` so they chain (`v.sub_self(&a).cross_self(&b)`).
//!
//! Aliasing
//! - A `MutCoord` is owned by exactly one structure at a time, so in-place math
//!   has no aliasing ambiguity inside Rust. When the same logical vertex is
//!   stored under several owners (a mesh vertex array plus a working copy),
//!   mutating one does not update the others; clone first and write back.
//!
//! Conventions
//! - 2D metrics read `(x, y)` only and ignore `z`.
//! - `is_zero` and normalization use `cfg::ZERO_EPS` per component / length.
//! - Division by an exact zero scalar fails with `GeomError::DivideByZero`;
//!   normalizing a near-zero vector leaves it unchanged.

mod math;
mod metric;
mod types;

pub use math::MutableCoordMath;
pub use metric::CoordMetric;
pub use types::{Coord, Coord3, MutCoord};

#[cfg(test)]
mod tests;
