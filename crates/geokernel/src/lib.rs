//! Procedural-geometry kernel.
//!
//! Coordinate algebra, seedable uniform samplers over canonical shapes,
//! world/local coordinate mappings, and index containers for simplices and
//! meshes produced by an external Delaunay engine.
//!
//! Conventions
//! - Everything is `f64` and three-dimensional; "2D" operations read x and y
//!   and ignore z.
//! - Fallible operations return `Result<_, GeomError>`. Tolerances live in
//!   [`cfg`].
//! - Samplers and engines are single-owner state (`&mut self` to draw).
//!   Mappings and containers are immutable after construction.

pub mod api;
pub mod cfg;
pub mod coord;
pub mod error;
pub mod map;
pub mod mesh;
pub mod rng;
pub mod sample;
pub mod simplex;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use coord::{Coord, MutCoord};
pub use error::GeomError;
pub use transform::Transform3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coord::{Coord, Coord3, CoordMetric, MutCoord, MutableCoordMath};
    pub use crate::error::GeomError;
    pub use crate::map::{Map2, Map3, PlanarAxis, PlanarMap, TransformMap};
    pub use crate::mesh::{Aabb, Mesh, MeshRef};
    pub use crate::rng::RandomEngine;
    pub use crate::sample::{RandomPoint, SamplerSpec};
    pub use crate::transform::Transform3;
}
