//! Curated flat re-export surface.
//!
//! One `use geokernel::api::*` brings in every public type; module paths stay
//! the canonical location for docs.

// Coordinates and transforms
pub use crate::cfg::{DET_EPS, ZERO_EPS};
pub use crate::coord::{Coord, Coord3, CoordMetric, MutCoord, MutableCoordMath};
pub use crate::error::GeomError;
pub use crate::transform::Transform3;
// Randomness and samplers
pub use crate::rng::RandomEngine;
pub use crate::sample::{
    Curve, RandomBox, RandomCircle, RandomCurve, RandomDisk, RandomInCylinder, RandomInSphere,
    RandomLine, RandomOnCylinder, RandomOnSphere, RandomPoint, RandomRectangle, SamplerCore,
    SamplerShape, SamplerSpec,
};
// Mappings
pub use crate::map::{Map2, Map3, PlanarAxis, PlanarMap, TransformMap};
// Containers
pub use crate::mesh::{Aabb, Mesh, MeshRef};
pub use crate::simplex::{
    planar_sites, triangulate_on_plane, DelaunayEngine, Triangulation2D,
    Triangulation2DWithPoints, Triangulation3D, Triangulation4D, VoronoiCell2D,
};
