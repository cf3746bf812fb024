//! Read-only mesh contract and a borrowing face-list view.
//!
//! Accessors taking an element id return `GeomError::IndexOutOfRange` for a
//! bad id; there is no default coordinate to fall back on.

mod aabb;
mod face_list;

pub use aabb::Aabb;
pub use face_list::MeshRef;

use std::collections::BTreeSet;

use crate::coord::Coord;
use crate::error::GeomError;

pub trait Mesh {
    fn num_vertices(&self) -> usize;
    fn num_faces(&self) -> usize;
    fn vertex(&self, i: usize) -> Result<Coord, GeomError>;
    /// Vertex ids of face `id`, in winding order.
    fn face(&self, id: usize) -> Result<&[usize], GeomError>;
    /// Unit normal of face `id` (zero for a face without area).
    fn face_normal(&self, id: usize) -> Result<Coord, GeomError>;
    fn face_center(&self, id: usize) -> Result<Coord, GeomError>;
    /// Unit normal at vertex `i` (zero when no incident face has area).
    fn vertex_normal(&self, i: usize) -> Result<Coord, GeomError>;

    fn points(&self) -> Vec<Coord> {
        (0..self.num_vertices())
            .filter_map(|i| self.vertex(i).ok())
            .collect()
    }

    /// Vertex mean; `None` for a mesh without vertices.
    fn center(&self) -> Option<Coord> {
        let n = self.num_vertices();
        if n == 0 {
            return None;
        }
        let sum = self.points().into_iter().fold(Coord::zero(), |acc, p| acc + p);
        Some(sum * (1.0 / n as f64))
    }

    fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(self.points())
    }

    fn faces_as_indices(&self) -> Vec<Vec<usize>> {
        (0..self.num_faces())
            .filter_map(|f| self.face(f).ok().map(<[usize]>::to_vec))
            .collect()
    }

    /// Unique undirected edges as `[lo, hi]`, sorted.
    fn edges_as_indices(&self) -> Vec<[usize; 2]> {
        let mut edges = BTreeSet::new();
        for f in 0..self.num_faces() {
            let Ok(face) = self.face(f) else { continue };
            let k = face.len();
            for i in 0..k {
                let (a, b) = (face[i], face[(i + 1) % k]);
                if a != b {
                    edges.insert([a.min(b), a.max(b)]);
                }
            }
        }
        edges.into_iter().collect()
    }
}
