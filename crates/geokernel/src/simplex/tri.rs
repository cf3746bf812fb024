use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::GeomError;

/// Reject a flat array whose length is not a multiple of `stride`.
fn check_stride(name: &'static str, flat: &[usize], stride: usize) -> Result<(), GeomError> {
    if flat.len() % stride != 0 {
        return Err(GeomError::invalid(
            name,
            format!("length {} is not a multiple of {stride}", flat.len()),
        ));
    }
    Ok(())
}

/// Flatten rows of unknown arity, requiring exactly `K` entries each.
fn flatten_checked<const K: usize>(
    name: &'static str,
    rows: &[Vec<usize>],
) -> Result<Vec<usize>, GeomError> {
    let mut flat = Vec::with_capacity(rows.len() * K);
    for (i, r) in rows.iter().enumerate() {
        if r.len() != K {
            return Err(GeomError::invalid(
                name,
                format!("row {i} has {} indices, expected {K}", r.len()),
            ));
        }
        flat.extend_from_slice(r);
    }
    Ok(flat)
}

/// Row `i` of a flat array with stride `K`.
fn row<const K: usize>(
    what: &'static str,
    flat: &[usize],
    i: usize,
) -> Result<[usize; K], GeomError> {
    let n = flat.len() / K;
    if i >= n {
        return Err(GeomError::out_of_range(what, i, n));
    }
    let mut out = [0usize; K];
    out.copy_from_slice(&flat[K * i..K * (i + 1)]);
    Ok(out)
}

fn rows<const K: usize>(flat: &[usize]) -> impl Iterator<Item = [usize; K]> + '_ {
    flat.chunks_exact(K).map(|c| {
        let mut out = [0usize; K];
        out.copy_from_slice(c);
        out
    })
}

/// Planar triangulation: triangles (stride 3) and edges (stride 2).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangulation2D {
    triangles: Vec<usize>,
    edges: Vec<usize>,
}

impl Triangulation2D {
    pub fn new(triangles: Vec<usize>, edges: Vec<usize>) -> Result<Self, GeomError> {
        check_stride("triangles", &triangles, 3)?;
        check_stride("edges", &edges, 2)?;
        Ok(Self { triangles, edges })
    }

    pub fn from_rows(triangles: &[[usize; 3]], edges: &[[usize; 2]]) -> Self {
        Self {
            triangles: triangles.concat(),
            edges: edges.concat(),
        }
    }

    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }
    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }
    pub fn triangle(&self, i: usize) -> Result<[usize; 3], GeomError> {
        row("triangle", &self.triangles, i)
    }
    pub fn edge(&self, i: usize) -> Result<[usize; 2], GeomError> {
        row("edge", &self.edges, i)
    }
    pub fn iter_triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        rows(&self.triangles)
    }
    pub fn iter_edges(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        rows(&self.edges)
    }
}

/// A planar triangulation bundled with the points it indexes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangulation2DWithPoints {
    triangulation: Triangulation2D,
    points: Vec<Coord>,
}

impl Triangulation2DWithPoints {
    pub fn new(triangulation: Triangulation2D, points: Vec<Coord>) -> Self {
        Self {
            triangulation,
            points,
        }
    }
    pub fn triangulation(&self) -> &Triangulation2D {
        &self.triangulation
    }
    pub fn points(&self) -> &[Coord] {
        &self.points
    }
    pub fn point(&self, i: usize) -> Result<Coord, GeomError> {
        self.points
            .get(i)
            .copied()
            .ok_or_else(|| GeomError::out_of_range("point", i, self.points.len()))
    }
    /// Corner coordinates of triangle `i`.
    pub fn triangle_points(&self, i: usize) -> Result<[Coord; 3], GeomError> {
        let [a, b, c] = self.triangulation.triangle(i)?;
        Ok([self.point(a)?, self.point(b)?, self.point(c)?])
    }
    pub fn into_parts(self) -> (Triangulation2D, Vec<Coord>) {
        (self.triangulation, self.points)
    }
}

/// Tetrahedralization with optional boundary triangles and edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangulation3D {
    tetrahedra: Vec<usize>,
    triangles: Vec<usize>,
    edges: Vec<usize>,
}

impl Triangulation3D {
    pub fn new(
        tetrahedra: Vec<usize>,
        triangles: Vec<usize>,
        edges: Vec<usize>,
    ) -> Result<Self, GeomError> {
        check_stride("tetrahedra", &tetrahedra, 4)?;
        check_stride("triangles", &triangles, 3)?;
        check_stride("edges", &edges, 2)?;
        Ok(Self {
            tetrahedra,
            triangles,
            edges,
        })
    }

    /// Tetrahedra only, from a flat stride-4 array.
    pub fn from_flat(tetrahedra: Vec<usize>) -> Result<Self, GeomError> {
        Self::new(tetrahedra, Vec::new(), Vec::new())
    }

    /// Row-major flattening: `[[1,2,3,4],[5,6,7,8]]` becomes `[1,2,3,4,5,6,7,8]`.
    pub fn from_jagged(tetrahedra: &[[usize; 4]]) -> Self {
        Self {
            tetrahedra: tetrahedra.concat(),
            ..Self::default()
        }
    }

    pub fn try_from_rows(tetrahedra: &[Vec<usize>]) -> Result<Self, GeomError> {
        Self::from_flat(flatten_checked::<4>("tetrahedra", tetrahedra)?)
    }

    pub fn tetrahedra(&self) -> &[usize] {
        &self.tetrahedra
    }
    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }
    pub fn num_tetrahedra(&self) -> usize {
        self.tetrahedra.len() / 4
    }
    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }
    pub fn tetrahedron(&self, i: usize) -> Result<[usize; 4], GeomError> {
        row("tetrahedron", &self.tetrahedra, i)
    }
    pub fn triangle(&self, i: usize) -> Result<[usize; 3], GeomError> {
        row("triangle", &self.triangles, i)
    }
    pub fn edge(&self, i: usize) -> Result<[usize; 2], GeomError> {
        row("edge", &self.edges, i)
    }
    pub fn iter_tetrahedra(&self) -> impl Iterator<Item = [usize; 4]> + '_ {
        rows(&self.tetrahedra)
    }
}

/// 4-simplices (5 vertices each) of a triangulation in R⁴.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangulation4D {
    simplices: Vec<usize>,
}

impl Triangulation4D {
    pub fn from_flat(simplices: Vec<usize>) -> Result<Self, GeomError> {
        check_stride("simplices", &simplices, 5)?;
        Ok(Self { simplices })
    }

    /// Writes all five indices of every row.
    pub fn from_jagged(simplices: &[[usize; 5]]) -> Self {
        Self {
            simplices: simplices.concat(),
        }
    }

    pub fn try_from_rows(simplices: &[Vec<usize>]) -> Result<Self, GeomError> {
        Self::from_flat(flatten_checked::<5>("simplices", simplices)?)
    }

    pub fn simplices(&self) -> &[usize] {
        &self.simplices
    }
    pub fn num_simplices(&self) -> usize {
        self.simplices.len() / 5
    }
    pub fn simplex(&self, i: usize) -> Result<[usize; 5], GeomError> {
        row("simplex", &self.simplices, i)
    }
    pub fn iter_simplices(&self) -> impl Iterator<Item = [usize; 5]> + '_ {
        rows(&self.simplices)
    }
}
