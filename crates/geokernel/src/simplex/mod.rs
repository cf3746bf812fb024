//! Simplex index containers and the seam to an external Delaunay engine.
//!
//! Triangulations are pure index holders: flat, row-major `usize` arrays that
//! point into a point list owned elsewhere. Constructors check the layout
//! (stride) and nothing else; topological validity is the engine's job.
//!
//! Strides: edges 2, triangles 3, tetrahedra 4, 4-simplices 5.

mod engine;
mod tri;
mod voronoi;

pub use engine::{planar_sites, triangulate_on_plane, DelaunayEngine};
pub use tri::{Triangulation2D, Triangulation2DWithPoints, Triangulation3D, Triangulation4D};
pub use voronoi::VoronoiCell2D;
