use serde::{Deserialize, Serialize};

use crate::coord::{Coord, CoordMetric};
use crate::error::GeomError;
use crate::mesh::Aabb;

/// One cell of a planar Voronoi diagram.
///
/// `index` ties the cell back to its generator's position in the site list.
/// Area is signed: positive for a counterclockwise ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoronoiCell2D {
    ring: Vec<Coord>,
    index: usize,
    generator: Coord,
    area: f64,
    centroid: Coord,
}

impl VoronoiCell2D {
    /// Wrap engine output verbatim; metrics are not recomputed.
    pub fn new(
        ring: Vec<Coord>,
        index: usize,
        generator: Coord,
        area: f64,
        centroid: Coord,
    ) -> Self {
        Self {
            ring,
            index,
            generator,
            area,
            centroid,
        }
    }

    /// Derive area and centroid from the ring (xy-plane, shoelace formula).
    ///
    /// A ring whose area vanishes relative to its squared xy extent (collinear
    /// or collapsed) gets the vertex mean as centroid; small cells keep the
    /// area centroid at any scale.
    pub fn from_ring(
        ring: Vec<Coord>,
        index: usize,
        generator: Coord,
    ) -> Result<Self, GeomError> {
        if ring.len() < 3 {
            return Err(GeomError::invalid(
                "ring",
                format!("a cell needs at least 3 vertices, got {}", ring.len()),
            ));
        }
        let n = ring.len();
        let (mut a2, mut cx, mut cy) = (0.0, 0.0, 0.0);
        for i in 0..n {
            let p = ring[i];
            let q = ring[(i + 1) % n];
            let cross = p.x() * q.y() - q.x() * p.y();
            a2 += cross;
            cx += (p.x() + q.x()) * cross;
            cy += (p.y() + q.y()) * cross;
        }
        let area = 0.5 * a2;
        let extent = Aabb::from_points(ring.iter().copied())
            .map(|bb| bb.extents().sq_length_2d())
            .unwrap_or(0.0);
        let centroid = if area.abs() <= f64::EPSILON * extent {
            let s = ring.iter().fold(Coord::zero(), |acc, p| acc + *p);
            s * (1.0 / n as f64)
        } else {
            Coord::new(cx / (6.0 * area), cy / (6.0 * area), 0.0)
        };
        Ok(Self::new(ring, index, generator, area, centroid))
    }

    pub fn ring(&self) -> &[Coord] {
        &self.ring
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn generator(&self) -> Coord {
        self.generator
    }
    pub fn area(&self) -> f64 {
        self.area
    }
    pub fn centroid(&self) -> Coord {
        self.centroid
    }
    pub fn num_vertices(&self) -> usize {
        self.ring.len()
    }
}
