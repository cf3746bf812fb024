//! Value math on `Coord` and in-place math on `MutCoord`.

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector3;

use super::metric::CoordMetric;
use super::types::{Coord, Coord3, MutCoord};
use crate::cfg::ZERO_EPS;
use crate::error::GeomError;

impl Coord {
    #[inline]
    pub fn add<P: Coord3 + ?Sized>(&self, p: &P) -> Coord {
        Coord::from(self.to_vector3() + p.to_vector3())
    }
    #[inline]
    pub fn sub<P: Coord3 + ?Sized>(&self, p: &P) -> Coord {
        Coord::from(self.to_vector3() - p.to_vector3())
    }
    #[inline]
    pub fn mul(&self, f: f64) -> Coord {
        Coord::from(self.to_vector3() * f)
    }
    /// Fails on an exact zero divisor.
    #[inline]
    pub fn div(&self, f: f64) -> Result<Coord, GeomError> {
        if f == 0.0 {
            return Err(GeomError::DivideByZero);
        }
        Ok(Coord::from(self.to_vector3() / f))
    }
    /// `self + f * p`
    #[inline]
    pub fn add_mul<P: Coord3 + ?Sized>(&self, f: f64, p: &P) -> Coord {
        Coord::from(self.to_vector3() + p.to_vector3() * f)
    }
    /// `f * self + g * p`
    #[inline]
    pub fn mul_add_mul<P: Coord3 + ?Sized>(&self, f: f64, g: f64, p: &P) -> Coord {
        Coord::from(self.to_vector3() * f + p.to_vector3() * g)
    }
    #[inline]
    pub fn cross<P: Coord3 + ?Sized>(&self, p: &P) -> Coord {
        Coord::from(self.to_vector3().cross(&p.to_vector3()))
    }
    #[inline]
    pub fn dot<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        self.to_vector3().dot(&p.to_vector3())
    }
    #[inline]
    pub fn dot_2d<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        self.x() * p.xd() + self.y() * p.yd()
    }
    #[inline]
    pub fn abs_dot<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        self.dot(p).abs()
    }
    /// `self · (v × w)`, the signed volume of the spanned parallelepiped.
    #[inline]
    pub fn scalar_triple<P: Coord3 + ?Sized, Q: Coord3 + ?Sized>(&self, v: &P, w: &Q) -> f64 {
        self.to_vector3().dot(&v.to_vector3().cross(&w.to_vector3()))
    }
    /// Unit-length copy; a (near) zero coordinate is returned unchanged.
    pub fn normalized(&self) -> Coord {
        let d = self.length_3d();
        if d < ZERO_EPS {
            *self
        } else {
            Coord::from(self.to_vector3() / d)
        }
    }
}

impl Add for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::from(self.to_vector3() + rhs.to_vector3())
    }
}
impl Sub for Coord {
    type Output = Coord;
    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::from(self.to_vector3() - rhs.to_vector3())
    }
}
impl Mul<f64> for Coord {
    type Output = Coord;
    #[inline]
    fn mul(self, rhs: f64) -> Coord {
        Coord::from(self.to_vector3() * rhs)
    }
}
impl Neg for Coord {
    type Output = Coord;
    #[inline]
    fn neg(self) -> Coord {
        Coord::from(-self.to_vector3())
    }
}

/// In-place math contract. Every method writes into `self` and returns it for
/// chaining; none of them allocate.
pub trait MutableCoordMath: Coord3 {
    fn add_self<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self;
    fn add_self_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self;
    fn sub_self<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self;
    fn sub_self_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self;
    fn mul_self(&mut self, f: f64) -> &mut Self;
    /// Fails with `DivideByZero` on an exact zero divisor; `self` is untouched then.
    fn div_self(&mut self, f: f64) -> Result<&mut Self, GeomError>;
    /// `self = self × p`
    fn cross_self<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self;
    /// `self += f * p`
    fn add_mul_self<P: Coord3 + ?Sized>(&mut self, f: f64, p: &P) -> &mut Self;
    /// `self = f * self + g * p`
    fn mul_add_mul_self<P: Coord3 + ?Sized>(&mut self, f: f64, g: f64, p: &P) -> &mut Self;
    /// Scale to unit length and return the prior length.
    ///
    /// If the prior length is below `ZERO_EPS` the vector is left unchanged.
    fn normalize_self(&mut self) -> f64;
    /// Shrink to `max_length` when longer; no-op otherwise.
    fn trim_self(&mut self, max_length: f64) -> Result<&mut Self, GeomError>;
}

impl MutableCoordMath for MutCoord {
    #[inline]
    fn add_self<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self {
        self.0 += p.to_vector3();
        self
    }
    #[inline]
    fn add_self_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 += Vector3::new(x, y, z);
        self
    }
    #[inline]
    fn sub_self<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self {
        self.0 -= p.to_vector3();
        self
    }
    #[inline]
    fn sub_self_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 -= Vector3::new(x, y, z);
        self
    }
    #[inline]
    fn mul_self(&mut self, f: f64) -> &mut Self {
        self.0 *= f;
        self
    }
    #[inline]
    fn div_self(&mut self, f: f64) -> Result<&mut Self, GeomError> {
        if f == 0.0 {
            return Err(GeomError::DivideByZero);
        }
        self.0 /= f;
        Ok(self)
    }
    #[inline]
    fn cross_self<P: Coord3 + ?Sized>(&mut self, p: &P) -> &mut Self {
        self.0 = self.0.cross(&p.to_vector3());
        self
    }
    #[inline]
    fn add_mul_self<P: Coord3 + ?Sized>(&mut self, f: f64, p: &P) -> &mut Self {
        self.0 += p.to_vector3() * f;
        self
    }
    #[inline]
    fn mul_add_mul_self<P: Coord3 + ?Sized>(&mut self, f: f64, g: f64, p: &P) -> &mut Self {
        self.0 = self.0 * f + p.to_vector3() * g;
        self
    }
    fn normalize_self(&mut self) -> f64 {
        let d = self.0.norm();
        if d >= ZERO_EPS {
            self.0 /= d;
        }
        d
    }
    fn trim_self(&mut self, max_length: f64) -> Result<&mut Self, GeomError> {
        let max_length = crate::error::check_non_negative("max_length", max_length)?;
        if self.0.norm_squared() > max_length * max_length {
            self.normalize_self();
            self.0 *= max_length;
        }
        Ok(self)
    }
}

impl MutCoord {
    /// Per-axis scale in place.
    #[inline]
    pub fn scale_self(&mut self, fx: f64, fy: f64, fz: f64) -> &mut Self {
        self.0.component_mul_assign(&Vector3::new(fx, fy, fz));
        self
    }
}
