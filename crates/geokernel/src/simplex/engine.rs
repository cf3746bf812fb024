use tracing::debug;

use super::{Triangulation2D, Triangulation2DWithPoints, Triangulation3D, VoronoiCell2D};
use crate::coord::Coord;
use crate::error::GeomError;
use crate::map::Map2;

/// An external Delaunay/Voronoi implementation.
///
/// Implementors turn raw site arrays into index containers; the kernel wraps
/// whatever comes back without checking topology.
pub trait DelaunayEngine {
    fn triangulate_2d(&mut self, sites: &[[f64; 2]]) -> Result<Triangulation2D, GeomError>;

    fn triangulate_3d(&mut self, sites: &[Coord]) -> Result<Triangulation3D, GeomError>;

    /// Cells in site order; cell `i` has `index() == i`.
    fn voronoi_2d(&mut self, sites: &[[f64; 2]]) -> Result<Vec<VoronoiCell2D>, GeomError>;
}

/// Plane-local `(u, v)` of every point, in input order.
pub fn planar_sites<M: Map2 + ?Sized>(points: &[Coord], map: &M) -> Vec<[f64; 2]> {
    points.iter().map(|p| map.map_point_2d(*p)).collect()
}

/// Triangulate `points` in the plane of `map`, keeping the 3D points.
pub fn triangulate_on_plane<E, M>(
    engine: &mut E,
    points: &[Coord],
    map: &M,
) -> Result<Triangulation2DWithPoints, GeomError>
where
    E: DelaunayEngine + ?Sized,
    M: Map2 + ?Sized,
{
    let sites = planar_sites(points, map);
    let tri = engine.triangulate_2d(&sites)?;
    debug!(
        sites = sites.len(),
        triangles = tri.num_triangles(),
        "planar triangulation"
    );
    Ok(Triangulation2DWithPoints::new(tri, points.to_vec()))
}
