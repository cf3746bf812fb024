//! Planar samplers (z = 0 before the offset): rectangle, circle, disk.

use std::f64::consts::TAU;

use nalgebra::Vector3;

use super::{RandomPoint, SamplerCore};
use crate::error::{check_non_negative, GeomError};

/// Axis-aligned rectangle `[-x/2, x/2) × [-y/2, y/2)`; unit square by default.
#[derive(Debug)]
pub struct RandomRectangle {
    core: SamplerCore,
    x: f64,
    y: f64,
}

impl RandomRectangle {
    pub fn new() -> Self {
        Self::from_core(SamplerCore::new())
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed))
    }
    fn from_core(core: SamplerCore) -> Self {
        Self {
            core,
            x: 1.0,
            y: 1.0,
        }
    }
    pub fn set_size(&mut self, x: f64, y: f64) -> Result<&mut Self, GeomError> {
        let x = check_non_negative("x", x)?;
        let y = check_non_negative("y", y)?;
        self.x = x;
        self.y = y;
        Ok(self)
    }
    pub fn size(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Default for RandomRectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomRectangle {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        let x = self.x * e.next_centered_f64();
        let y = self.y * e.next_centered_f64();
        Vector3::new(x, y, 0.0)
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// Circle perimeter of radius `r` in the xy-plane.
#[derive(Debug)]
pub struct RandomCircle {
    core: SamplerCore,
    radius: f64,
}

impl RandomCircle {
    pub fn new() -> Self {
        Self::from_core(SamplerCore::new())
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed))
    }
    fn from_core(core: SamplerCore) -> Self {
        Self { core, radius: 1.0 }
    }
    pub fn set_radius(&mut self, r: f64) -> Result<&mut Self, GeomError> {
        self.radius = check_non_negative("radius", r)?;
        Ok(self)
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for RandomCircle {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomCircle {
    fn sample_local(&mut self) -> Vector3<f64> {
        let t = TAU * self.core.engine().next_f64();
        Vector3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// Filled disk of radius `r` in the xy-plane, uniform per unit area.
#[derive(Debug)]
pub struct RandomDisk {
    core: SamplerCore,
    radius: f64,
}

impl RandomDisk {
    pub fn new() -> Self {
        Self::from_core(SamplerCore::new())
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed))
    }
    fn from_core(core: SamplerCore) -> Self {
        Self { core, radius: 1.0 }
    }
    pub fn set_radius(&mut self, r: f64) -> Result<&mut Self, GeomError> {
        self.radius = check_non_negative("radius", r)?;
        Ok(self)
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for RandomDisk {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomDisk {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        let rho = self.radius * e.next_f64().sqrt();
        let t = TAU * e.next_f64();
        Vector3::new(rho * t.cos(), rho * t.sin(), 0.0)
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}
