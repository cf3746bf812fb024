//! One-dimensional samplers: straight segments and parametric curves.

use nalgebra::Vector3;

use super::{RandomPoint, SamplerCore};
use crate::coord::{Coord, Coord3};
use crate::error::GeomError;

/// Segment `[start, end)`; `t = U` is the fraction along the segment.
#[derive(Debug)]
pub struct RandomLine {
    core: SamplerCore,
    start: Vector3<f64>,
    end: Vector3<f64>,
}

impl RandomLine {
    pub fn new<P: Coord3, Q: Coord3>(start: &P, end: &Q) -> Self {
        Self::from_core(SamplerCore::new(), start, end)
    }
    pub fn with_seed<P: Coord3, Q: Coord3>(start: &P, end: &Q, seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed), start, end)
    }
    fn from_core<P: Coord3, Q: Coord3>(core: SamplerCore, start: &P, end: &Q) -> Self {
        Self {
            core,
            start: start.to_vector3(),
            end: end.to_vector3(),
        }
    }
    pub fn set_endpoints<P: Coord3, Q: Coord3>(&mut self, start: &P, end: &Q) -> &mut Self {
        self.start = start.to_vector3();
        self.end = end.to_vector3();
        self
    }
    pub fn start(&self) -> Coord {
        Coord::from(self.start)
    }
    pub fn end(&self) -> Coord {
        Coord::from(self.end)
    }
}

impl RandomPoint for RandomLine {
    fn sample_local(&mut self) -> Vector3<f64> {
        let t = self.core.engine().next_f64();
        self.start + (self.end - self.start) * t
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// A parametrized curve `t -> point`.
pub trait Curve {
    fn curve_point(&self, t: f64) -> Coord;
}

impl<F> Curve for F
where
    F: Fn(f64) -> Coord,
{
    fn curve_point(&self, t: f64) -> Coord {
        self(t)
    }
}

/// Uniform in the parameter `t ∈ [t0, t1)`, not in arc length.
#[derive(Debug)]
pub struct RandomCurve<C: Curve> {
    core: SamplerCore,
    curve: C,
    t0: f64,
    t1: f64,
}

impl<C: Curve> RandomCurve<C> {
    pub fn new(curve: C, t0: f64, t1: f64) -> Result<Self, GeomError> {
        Self::from_core(SamplerCore::new(), curve, t0, t1)
    }
    pub fn with_seed(curve: C, t0: f64, t1: f64, seed: u64) -> Result<Self, GeomError> {
        Self::from_core(SamplerCore::with_seed(seed), curve, t0, t1)
    }
    fn from_core(core: SamplerCore, curve: C, t0: f64, t1: f64) -> Result<Self, GeomError> {
        check_range(t0, t1)?;
        Ok(Self {
            core,
            curve,
            t0,
            t1,
        })
    }
    pub fn set_range(&mut self, t0: f64, t1: f64) -> Result<&mut Self, GeomError> {
        check_range(t0, t1)?;
        self.t0 = t0;
        self.t1 = t1;
        Ok(self)
    }
    pub fn range(&self) -> (f64, f64) {
        (self.t0, self.t1)
    }
    pub fn curve(&self) -> &C {
        &self.curve
    }
}

fn check_range(t0: f64, t1: f64) -> Result<(), GeomError> {
    if !(t0.is_finite() && t1.is_finite()) {
        return Err(GeomError::invalid(
            "range",
            format!("bounds must be finite, got [{t0}, {t1})"),
        ));
    }
    Ok(())
}

impl<C: Curve> RandomPoint for RandomCurve<C> {
    fn sample_local(&mut self) -> Vector3<f64> {
        let u = self.core.engine().next_f64();
        let t = self.t0 + u * (self.t1 - self.t0);
        self.curve.curve_point(t).to_vector3()
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}
