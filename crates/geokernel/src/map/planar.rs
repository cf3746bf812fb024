//! Plane-local coordinates `(u, v, height)` for axis-aligned or arbitrary planes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Map2, Map3, TransformMap};
use crate::cfg::ZERO_EPS;
use crate::coord::{Coord, CoordMetric};
use crate::error::GeomError;
use crate::transform::Transform3;

/// Axis-aligned projection modes. With offset `o`, world `(x, y, z)` maps to:
///
/// | mode   | local            |
/// |--------|------------------|
/// | `Z`    | `(x, y, z - o)`  |
/// | `X`    | `(y, z, x - o)`  |
/// | `Y`    | `(z, x, y - o)`  |
/// | `ZRev` | `(y, x, o - z)`  |
/// | `XRev` | `(z, y, o - x)`  |
/// | `YRev` | `(x, z, o - y)`  |
///
/// Every mode is a rigid motion, the `Rev` ones flip the plane's normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanarAxis {
    X,
    Y,
    Z,
    XRev,
    YRev,
    ZRev,
}

impl PlanarAxis {
    /// `(u, v, w)` world directions of the local axes.
    fn frame(self) -> (Coord, Coord, Coord) {
        let x = Coord::new(1.0, 0.0, 0.0);
        let y = Coord::new(0.0, 1.0, 0.0);
        let z = Coord::new(0.0, 0.0, 1.0);
        match self {
            PlanarAxis::Z => (x, y, z),
            PlanarAxis::X => (y, z, x),
            PlanarAxis::Y => (z, x, y),
            PlanarAxis::ZRev => (y, x, -z),
            PlanarAxis::XRev => (z, y, -x),
            PlanarAxis::YRev => (x, z, -y),
        }
    }

    /// World point of local `(0, 0, 0)` for offset `o`.
    fn origin(self, o: f64) -> Coord {
        match self {
            PlanarAxis::X | PlanarAxis::XRev => Coord::new(o, 0.0, 0.0),
            PlanarAxis::Y | PlanarAxis::YRev => Coord::new(0.0, o, 0.0),
            PlanarAxis::Z | PlanarAxis::ZRev => Coord::new(0.0, 0.0, o),
        }
    }
}

/// A plane with an orthonormal frame `(u, v, w)`; `w` is the unit normal.
///
/// `map_point` gives `(u, v, height above plane)`, `unmap_point_2d(u, v)`
/// embeds a planar parameterization back into the ambient frame.
#[derive(Clone, Debug)]
pub struct PlanarMap {
    origin: Coord,
    u: Coord,
    v: Coord,
    w: Coord,
    inner: TransformMap,
}

impl PlanarMap {
    /// Axis-aligned plane at distance `offset` along the mode's normal axis.
    pub fn axis(mode: PlanarAxis, offset: f64) -> Self {
        let (u, v, w) = mode.frame();
        let origin = mode.origin(offset);
        // orthonormal by construction: the inverse is the transpose
        let to_world = Transform3::from_frame(origin, u, v, w);
        let to_local = Transform3 {
            m: to_world.m.transpose(),
            t: -(to_world.m.transpose() * to_world.t),
        };
        Self {
            origin,
            u,
            v,
            w,
            inner: TransformMap::from_pair(to_local, to_world),
        }
    }

    /// Plane through `origin + offset * n̂` with normal `normal`.
    ///
    /// The in-plane axes are `u = n̂.ortho_normal_3d()` and `v = n̂ × u`, so the
    /// frame is right-handed.
    pub fn from_plane(origin: Coord, normal: Coord, offset: f64) -> Result<Self, GeomError> {
        if !normal.to_array().iter().all(|c| c.is_finite()) || normal.length_3d() < ZERO_EPS {
            return Err(GeomError::degenerate(format!(
                "plane normal {:?} has no direction",
                normal.to_array()
            )));
        }
        if !offset.is_finite() || !origin.to_array().iter().all(|c| c.is_finite()) {
            return Err(GeomError::invalid("offset", "plane placement must be finite"));
        }
        let w = normal.normalized();
        let u = w.ortho_normal_3d();
        let v = w.cross(&u);
        let origin = origin + w * offset;
        let inner = TransformMap::new(Transform3::from_frame(origin, u, v, w))?.inverted();
        debug!(origin = ?origin.to_array(), normal = ?w.to_array(), "planar map built");
        Ok(Self {
            origin,
            u,
            v,
            w,
            inner,
        })
    }

    /// World point of local `(0, 0, 0)`.
    pub fn origin(&self) -> Coord {
        self.origin
    }
    pub fn u_axis(&self) -> Coord {
        self.u
    }
    pub fn v_axis(&self) -> Coord {
        self.v
    }
    /// Unit normal.
    pub fn normal(&self) -> Coord {
        self.w
    }

    /// Signed distance of `p` above the plane.
    pub fn height(&self, p: Coord) -> f64 {
        (p - self.origin).dot(&self.w)
    }

    /// Orthogonal projection of `p` onto the plane, in world coordinates.
    pub fn project(&self, p: Coord) -> Coord {
        p - self.w * self.height(p)
    }

    pub fn as_transform_map(&self) -> &TransformMap {
        &self.inner
    }
}

impl Map3 for PlanarMap {
    fn map_point(&self, p: Coord) -> Coord {
        self.inner.map_point(p)
    }
    fn unmap_point(&self, p: Coord) -> Coord {
        self.inner.unmap_point(p)
    }
    fn map_vector(&self, v: Coord) -> Coord {
        self.inner.map_vector(v)
    }
    fn unmap_vector(&self, v: Coord) -> Coord {
        self.inner.unmap_vector(v)
    }
}

impl Map2 for PlanarMap {}
