//! 3D affine transform `x ↦ M x + t`.
//!
//! Points take the full map; vectors take only `M` (displacements do not
//! translate); normals take `M^{-T}` so they stay perpendicular to transformed
//! tangent planes.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::cfg::DET_EPS;
use crate::coord::{Coord, Coord3, MutCoord};
use crate::error::GeomError;

/// Affine map with linear part `m` and translation `t`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3 {
    pub m: Matrix3<f64>,
    pub t: Vector3<f64>,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::zeros(),
        }
    }
    #[inline]
    pub fn translation<P: Coord3 + ?Sized>(d: &P) -> Self {
        Self {
            m: Matrix3::identity(),
            t: d.to_vector3(),
        }
    }
    #[inline]
    pub fn scale(f: f64) -> Self {
        Self::scale_xyz(f, f, f)
    }
    #[inline]
    pub fn scale_xyz(fx: f64, fy: f64, fz: f64) -> Self {
        Self {
            m: Matrix3::from_diagonal(&Vector3::new(fx, fy, fz)),
            t: Vector3::zeros(),
        }
    }

    /// Right-handed rotation by `angle` (radians) about `axis` through the origin.
    pub fn rotation_about_axis<P: Coord3 + ?Sized>(
        angle: f64,
        axis: &P,
    ) -> Result<Self, GeomError> {
        let axis = Unit::try_new(axis.to_vector3(), DET_EPS)
            .ok_or_else(|| GeomError::degenerate("rotation axis has zero length"))?;
        Ok(Self {
            m: Rotation3::from_axis_angle(&axis, angle).into_inner(),
            t: Vector3::zeros(),
        })
    }

    /// Rotation about the line through `p` with direction `axis`.
    pub fn rotation_about_axis_through<P, A>(angle: f64, p: &P, axis: &A) -> Result<Self, GeomError>
    where
        P: Coord3 + ?Sized,
        A: Coord3 + ?Sized,
    {
        let r = Self::rotation_about_axis(angle, axis)?;
        let p = p.to_vector3();
        Ok(Self {
            m: r.m,
            t: p - r.m * p,
        })
    }

    /// Local → world map of the frame `(origin; u, v, w)`:
    /// `(a, b, c) ↦ origin + a u + b v + c w`.
    pub fn from_frame(origin: Coord, u: Coord, v: Coord, w: Coord) -> Self {
        Self {
            m: Matrix3::from_columns(&[u.to_vector3(), v.to_vector3(), w.to_vector3()]),
            t: origin.to_vector3(),
        }
    }

    /// Apply `self` first, then `next`.
    #[inline]
    pub fn then(&self, next: &Transform3) -> Transform3 {
        Transform3 {
            m: next.m * self.m,
            t: next.m * self.t + next.t,
        }
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    /// Algebraic inverse if `m` is invertible at all (no tolerance).
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    /// Inverse with a conditioning guard, reported as `DegenerateTransform`.
    ///
    /// The test is scale-free: with `s = max |m_ij|`, `m` is singular when
    /// `|det m| < DET_EPS * s³` (so `scale(1e-5)` inverts, a collapsed axis
    /// does not).
    pub fn try_inverse(&self) -> Result<Self, GeomError> {
        let det = self.determinant();
        let s = self.m.amax();
        if !det.is_finite() || s == 0.0 || det.abs() < DET_EPS * s * s * s {
            return Err(GeomError::degenerate(format!(
                "linear part is singular (det = {det:e})"
            )));
        }
        let inv = self
            .inverse()
            .ok_or_else(|| GeomError::degenerate("matrix inversion failed"))?;
        if inv.m.iter().chain(inv.t.iter()).any(|x| !x.is_finite()) {
            return Err(GeomError::degenerate("inverse has non-finite entries"));
        }
        Ok(inv)
    }

    #[inline]
    pub fn apply_as_point<P: Coord3 + ?Sized>(&self, p: &P) -> Coord {
        Coord::from(self.m * p.to_vector3() + self.t)
    }
    #[inline]
    pub fn apply_as_vector<P: Coord3 + ?Sized>(&self, v: &P) -> Coord {
        Coord::from(self.m * v.to_vector3())
    }
    /// `M^{-T} n`, unnormalized. Fails for a singular `M`.
    pub fn apply_as_normal<P: Coord3 + ?Sized>(&self, n: &P) -> Result<Coord, GeomError> {
        let inv = self.try_inverse()?;
        Ok(Coord::from(inv.m.transpose() * n.to_vector3()))
    }
}

impl MutCoord {
    /// `self = M self + t`
    #[inline]
    pub fn apply_as_point_self(&mut self, tr: &Transform3) -> &mut Self {
        let p = tr.apply_as_point(&*self);
        self.set(&p)
    }
    /// `self = M self`
    #[inline]
    pub fn apply_as_vector_self(&mut self, tr: &Transform3) -> &mut Self {
        let v = tr.apply_as_vector(&*self);
        self.set(&v)
    }
}
