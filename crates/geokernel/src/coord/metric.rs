//! Read-only metric capability shared by both coordinate flavors.

use nalgebra::Vector3;

use super::types::{Coord, Coord3};
use crate::cfg::ZERO_EPS;

/// Lengths, distances and angles. Provided for every `Coord3`.
pub trait CoordMetric: Coord3 {
    #[inline]
    fn sq_distance_2d<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        let dx = p.xd() - self.xd();
        let dy = p.yd() - self.yd();
        dx * dx + dy * dy
    }
    #[inline]
    fn sq_distance_3d<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        (p.to_vector3() - self.to_vector3()).norm_squared()
    }
    #[inline]
    fn distance_2d<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        self.sq_distance_2d(p).sqrt()
    }
    #[inline]
    fn distance_3d<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        self.sq_distance_3d(p).sqrt()
    }
    #[inline]
    fn sq_length_2d(&self) -> f64 {
        self.xd() * self.xd() + self.yd() * self.yd()
    }
    #[inline]
    fn sq_length_3d(&self) -> f64 {
        self.to_vector3().norm_squared()
    }
    #[inline]
    fn length_2d(&self) -> f64 {
        self.sq_length_2d().sqrt()
    }
    #[inline]
    fn length_3d(&self) -> f64 {
        self.to_vector3().norm()
    }

    /// Unsigned angle in `[0, π]`; `0` when either side is (near) zero.
    fn angle<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        let a = self.to_vector3();
        let b = p.to_vector3();
        let la = a.norm();
        let lb = b.norm();
        if la < ZERO_EPS || lb < ZERO_EPS {
            return 0.0;
        }
        (a.dot(&b) / (la * lb)).clamp(-1.0, 1.0).acos()
    }

    /// Angle between two vectors the caller guarantees are unit length.
    ///
    /// No renormalization happens here; non-unit input gives a wrong angle.
    #[inline]
    fn angle_norm<P: Coord3 + ?Sized>(&self, p: &P) -> f64 {
        self.to_vector3().dot(&p.to_vector3()).clamp(-1.0, 1.0).acos()
    }

    /// Signed angle from +x in `[-π, π]`.
    #[inline]
    fn heading_2d(&self) -> f64 {
        self.yd().atan2(self.xd())
    }

    /// Unit vector perpendicular in the xy-plane: `(-y, x, 0) / |.|`.
    ///
    /// A zero input yields the zero vector (normalization no-op).
    fn ortho_normal_2d(&self) -> Coord {
        Coord::new(-self.yd(), self.xd(), 0.0).normalized()
    }

    /// Some unit vector perpendicular to `self`; zero for the zero vector.
    ///
    /// Crosses with the world axis along the smallest component, so the result
    /// stays well conditioned at any magnitude. The choice is arbitrary up to
    /// rotation about `self`; callers that need a specific frame must build it
    /// themselves.
    fn ortho_normal_3d(&self) -> Coord {
        let v = self.to_vector3();
        let a = v.abs();
        let helper = if a.x <= a.y && a.x <= a.z {
            Vector3::x()
        } else if a.y <= a.z {
            Vector3::y()
        } else {
            Vector3::z()
        };
        v.cross(&helper)
            .try_normalize(0.0)
            .map(Coord::from)
            .unwrap_or_else(Coord::zero)
    }

    /// All components within `ZERO_EPS` of zero.
    #[inline]
    fn is_zero(&self) -> bool {
        self.xd().abs() < ZERO_EPS && self.yd().abs() < ZERO_EPS && self.zd().abs() < ZERO_EPS
    }
}

impl<T: Coord3 + ?Sized> CoordMetric for T {}
