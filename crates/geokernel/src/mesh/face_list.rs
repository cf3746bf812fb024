use nalgebra::Vector3;

use super::Mesh;
use crate::coord::{Coord, Coord3};
use crate::error::GeomError;
use crate::simplex::Triangulation2D;

#[derive(Clone, Copy, Debug)]
enum Faces<'a> {
    Polygons(&'a [Vec<usize>]),
    Triangles(&'a [usize]),
}

/// Borrowing view of a face-list mesh: caller-owned vertices and faces.
///
/// Nothing is copied or cached; normals are recomputed per call. Faces may be
/// arbitrary polygons (one row per face) or a flat stride-3 triangle array.
#[derive(Clone, Copy, Debug)]
pub struct MeshRef<'a> {
    vertices: &'a [Coord],
    faces: Faces<'a>,
}

fn check_indices(face: usize, ids: &[usize], n: usize) -> Result<(), GeomError> {
    if let Some(&bad) = ids.iter().find(|&&v| v >= n) {
        return Err(GeomError::invalid(
            "faces",
            format!("face {face} references vertex {bad}, mesh has {n}"),
        ));
    }
    Ok(())
}

/// Unit direction of a Newell sum; zero only when the sum is exactly zero, so
/// arbitrarily small faces still get a unit normal.
fn unit_or_zero(n: Vector3<f64>) -> Coord {
    n.try_normalize(0.0).map(Coord::from).unwrap_or_else(Coord::zero)
}

impl<'a> MeshRef<'a> {
    /// Polygon faces with at least 3 vertices each, all ids in range.
    pub fn from_polygons(
        vertices: &'a [Coord],
        faces: &'a [Vec<usize>],
    ) -> Result<Self, GeomError> {
        for (f, ids) in faces.iter().enumerate() {
            if ids.len() < 3 {
                return Err(GeomError::invalid(
                    "faces",
                    format!("face {f} has {} vertices, need at least 3", ids.len()),
                ));
            }
            check_indices(f, ids, vertices.len())?;
        }
        Ok(Self {
            vertices,
            faces: Faces::Polygons(faces),
        })
    }

    /// Flat triangle list, 3 ids per face.
    pub fn from_triangles(
        vertices: &'a [Coord],
        triangles: &'a [usize],
    ) -> Result<Self, GeomError> {
        if triangles.len() % 3 != 0 {
            return Err(GeomError::invalid(
                "triangles",
                format!("length {} is not a multiple of 3", triangles.len()),
            ));
        }
        for (f, ids) in triangles.chunks_exact(3).enumerate() {
            check_indices(f, ids, vertices.len())?;
        }
        Ok(Self {
            vertices,
            faces: Faces::Triangles(triangles),
        })
    }

    /// The triangles of `tri` over `vertices`.
    pub fn from_triangulation(
        vertices: &'a [Coord],
        tri: &'a Triangulation2D,
    ) -> Result<Self, GeomError> {
        Self::from_triangles(vertices, tri.triangles())
    }

    fn face_ids(&self, id: usize) -> Result<&'a [usize], GeomError> {
        let n = self.num_faces();
        if id >= n {
            return Err(GeomError::out_of_range("face", id, n));
        }
        Ok(match self.faces {
            Faces::Polygons(p) => p[id].as_slice(),
            Faces::Triangles(t) => &t[3 * id..3 * id + 3],
        })
    }

    /// Newell normal of face `id`, unnormalized: its length is twice the area.
    fn newell(&self, ids: &[usize]) -> Vector3<f64> {
        let k = ids.len();
        let mut n = Vector3::<f64>::zeros();
        for i in 0..k {
            let p = self.vertices[ids[i]].as_vector3();
            let q = self.vertices[ids[(i + 1) % k]].as_vector3();
            n.x += (p.y - q.y) * (p.z + q.z);
            n.y += (p.z - q.z) * (p.x + q.x);
            n.z += (p.x - q.x) * (p.y + q.y);
        }
        n
    }

    /// Area of face `id` (planar or near-planar polygon).
    pub fn face_area(&self, id: usize) -> Result<f64, GeomError> {
        Ok(0.5 * self.newell(self.face_ids(id)?).norm())
    }

    /// All vertex normals in one pass over the faces.
    pub fn vertex_normals(&self) -> Vec<Coord> {
        let mut acc = vec![Vector3::<f64>::zeros(); self.vertices.len()];
        for f in 0..self.num_faces() {
            let Ok(ids) = self.face_ids(f) else { continue };
            let n = self.newell(ids);
            for &v in ids {
                acc[v] += n;
            }
        }
        acc.into_iter().map(unit_or_zero).collect()
    }

    pub fn vertices(&self) -> &'a [Coord] {
        self.vertices
    }
}

impl Mesh for MeshRef<'_> {
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_faces(&self) -> usize {
        match self.faces {
            Faces::Polygons(p) => p.len(),
            Faces::Triangles(t) => t.len() / 3,
        }
    }

    fn vertex(&self, i: usize) -> Result<Coord, GeomError> {
        self.vertices
            .get(i)
            .copied()
            .ok_or_else(|| GeomError::out_of_range("vertex", i, self.vertices.len()))
    }

    fn face(&self, id: usize) -> Result<&[usize], GeomError> {
        self.face_ids(id)
    }

    fn face_normal(&self, id: usize) -> Result<Coord, GeomError> {
        Ok(unit_or_zero(self.newell(self.face_ids(id)?)))
    }

    fn face_center(&self, id: usize) -> Result<Coord, GeomError> {
        let ids = self.face_ids(id)?;
        let sum = ids
            .iter()
            .fold(Vector3::<f64>::zeros(), |acc, &v| acc + self.vertices[v].to_vector3());
        Ok(Coord::from(sum / ids.len() as f64))
    }

    fn vertex_normal(&self, i: usize) -> Result<Coord, GeomError> {
        if i >= self.vertices.len() {
            return Err(GeomError::out_of_range("vertex", i, self.vertices.len()));
        }
        let mut acc = Vector3::<f64>::zeros();
        for f in 0..self.num_faces() {
            let Ok(ids) = self.face_ids(f) else { continue };
            if ids.contains(&i) {
                acc += self.newell(ids);
            }
        }
        Ok(unit_or_zero(acc))
    }
}
