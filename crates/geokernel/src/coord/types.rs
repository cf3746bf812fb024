//! Coordinate storage and the read-only accessor trait.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Read access to `(x, y, z)`; everything metric is derived from this.
pub trait Coord3 {
    fn xd(&self) -> f64;
    fn yd(&self) -> f64;
    fn zd(&self) -> f64;

    #[inline]
    fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.xd(), self.yd(), self.zd())
    }
}

/// Immutable coordinate (value semantics, `Copy`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coord(Vector3<f64>);

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
    /// Planar coordinate with `z = 0`.
    #[inline]
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }
    #[inline]
    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }
    /// Borrow the backing nalgebra vector.
    #[inline]
    pub fn as_vector3(&self) -> &Vector3<f64> {
        &self.0
    }
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }
    /// Mutable working copy.
    #[inline]
    pub fn to_mut(&self) -> MutCoord {
        MutCoord::from(*self)
    }
}

impl Coord3 for Coord {
    #[inline]
    fn xd(&self) -> f64 {
        self.0.x
    }
    #[inline]
    fn yd(&self) -> f64 {
        self.0.y
    }
    #[inline]
    fn zd(&self) -> f64 {
        self.0.z
    }
    #[inline]
    fn to_vector3(&self) -> Vector3<f64> {
        self.0
    }
}

impl From<Vector3<f64>> for Coord {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}
impl From<Point3<f64>> for Coord {
    #[inline]
    fn from(p: Point3<f64>) -> Self {
        Self(p.coords)
    }
}
impl From<[f64; 3]> for Coord {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}
impl From<Coord> for Vector3<f64> {
    #[inline]
    fn from(c: Coord) -> Self {
        c.0
    }
}
impl From<Coord> for Point3<f64> {
    #[inline]
    fn from(c: Coord) -> Self {
        Point3::from(c.0)
    }
}

/// Mutable coordinate; in-place operations live on `MutableCoordMath`.
///
/// Not `Copy`: duplicating a working register is an explicit `clone()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutCoord(pub(super) Vector3<f64>);

impl MutCoord {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
    #[inline]
    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }
    #[inline]
    pub fn set<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self {
        self.0 = p.to_vector3();
        self
    }
    #[inline]
    pub fn set_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 = Vector3::new(x, y, z);
        self
    }
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.0.x = x;
    }
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.0.y = y;
    }
    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.0.z = z;
    }
    /// Immutable snapshot of the current value.
    #[inline]
    pub fn to_coord(&self) -> Coord {
        Coord(self.0)
    }
    #[inline]
    pub fn as_vector3(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl Coord3 for MutCoord {
    #[inline]
    fn xd(&self) -> f64 {
        self.0.x
    }
    #[inline]
    fn yd(&self) -> f64 {
        self.0.y
    }
    #[inline]
    fn zd(&self) -> f64 {
        self.0.z
    }
    #[inline]
    fn to_vector3(&self) -> Vector3<f64> {
        self.0
    }
}

impl From<Coord> for MutCoord {
    #[inline]
    fn from(c: Coord) -> Self {
        Self(c.0)
    }
}
impl From<Vector3<f64>> for MutCoord {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}
impl From<MutCoord> for Coord {
    #[inline]
    fn from(m: MutCoord) -> Self {
        Coord(m.0)
    }
}

impl Coord3 for Vector3<f64> {
    #[inline]
    fn xd(&self) -> f64 {
        self.x
    }
    #[inline]
    fn yd(&self) -> f64 {
        self.y
    }
    #[inline]
    fn zd(&self) -> f64 {
        self.z
    }
    #[inline]
    fn to_vector3(&self) -> Vector3<f64> {
        *self
    }
}

impl Coord3 for Point3<f64> {
    #[inline]
    fn xd(&self) -> f64 {
        self.x
    }
    #[inline]
    fn yd(&self) -> f64 {
        self.y
    }
    #[inline]
    fn zd(&self) -> f64 {
        self.z
    }
}
