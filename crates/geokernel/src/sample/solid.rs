//! Solid and surface samplers: box, cylinder volume/mantle, sphere volume/surface.

use std::f64::consts::TAU;

use nalgebra::Vector3;

use super::{RandomPoint, SamplerCore};
use crate::error::{check_non_negative, GeomError};

/// Axis-aligned box `[-x/2, x/2) × [-y/2, y/2) × [-z/2, z/2)`; unit cube by default.
#[derive(Debug)]
pub struct RandomBox {
    core: SamplerCore,
    size: Vector3<f64>,
}

impl RandomBox {
    pub fn new() -> Self {
        Self::from_core(SamplerCore::new())
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed))
    }
    fn from_core(core: SamplerCore) -> Self {
        Self {
            core,
            size: Vector3::new(1.0, 1.0, 1.0),
        }
    }
    pub fn set_size(&mut self, x: f64, y: f64, z: f64) -> Result<&mut Self, GeomError> {
        self.size = Vector3::new(
            check_non_negative("x", x)?,
            check_non_negative("y", y)?,
            check_non_negative("z", z)?,
        );
        Ok(self)
    }
    pub fn size(&self) -> Vector3<f64> {
        self.size
    }
}

impl Default for RandomBox {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomBox {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        let x = e.next_centered_f64();
        let y = e.next_centered_f64();
        let z = e.next_centered_f64();
        self.size.component_mul(&Vector3::new(x, y, z))
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// Solid cylinder around the z-axis, centered on z = 0.
#[derive(Debug)]
pub struct RandomInCylinder {
    core: SamplerCore,
    radius: f64,
    height: f64,
}

impl RandomInCylinder {
    pub fn new() -> Self {
        Self::from_core(SamplerCore::new())
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed))
    }
    fn from_core(core: SamplerCore) -> Self {
        Self {
            core,
            radius: 1.0,
            height: 1.0,
        }
    }
    pub fn set_radius(&mut self, r: f64) -> Result<&mut Self, GeomError> {
        self.radius = check_non_negative("radius", r)?;
        Ok(self)
    }
    pub fn set_height(&mut self, h: f64) -> Result<&mut Self, GeomError> {
        self.height = check_non_negative("height", h)?;
        Ok(self)
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for RandomInCylinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomInCylinder {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        let rho = self.radius * e.next_f64().sqrt();
        let t = TAU * e.next_f64();
        let z = self.height * e.next_centered_f64();
        Vector3::new(rho * t.cos(), rho * t.sin(), z)
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// Lateral surface of the cylinder (no caps).
#[derive(Debug)]
pub struct RandomOnCylinder {
    core: SamplerCore,
    radius: f64,
    height: f64,
}

impl RandomOnCylinder {
    pub fn new() -> Self {
        Self::from_core(SamplerCore::new())
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::from_core(SamplerCore::with_seed(seed))
    }
    fn from_core(core: SamplerCore) -> Self {
        Self {
            core,
            radius: 1.0,
            height: 1.0,
        }
    }
    pub fn set_radius(&mut self, r: f64) -> Result<&mut Self, GeomError> {
        self.radius = check_non_negative("radius", r)?;
        Ok(self)
    }
    pub fn set_height(&mut self, h: f64) -> Result<&mut Self, GeomError> {
        self.height = check_non_negative("height", h)?;
        Ok(self)
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for RandomOnCylinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomOnCylinder {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        let t = TAU * e.next_f64();
        let z = self.height * e.next_centered_f64();
        Vector3::new(self.radius * t.cos(), self.radius * t.sin(), z)
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// Solid ball of radius `r`, uniform per unit volume.
#[derive(Debug)]
pub struct RandomInSphere {
    core: SamplerCore,
    radius: f64,
}

impl RandomInSphere {
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

impl Default for RandomInSphere {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomInSphere {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        let elevation = (2.0 * e.next_f64() - 1.0).asin();
        let azimuth = TAU * e.next_f64();
        let rho = self.radius * e.next_f64().cbrt();
        let ce = elevation.cos();
        Vector3::new(
            rho * ce * azimuth.cos(),
            rho * ce * azimuth.sin(),
            rho * elevation.sin(),
        )
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}

/// Sphere surface of radius `r`, uniform per unit area.
#[derive(Debug)]
pub struct RandomOnSphere {
    core: SamplerCore,
    radius: f64,
}

impl RandomOnSphere {
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

impl Default for RandomOnSphere {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPoint for RandomOnSphere {
    fn sample_local(&mut self) -> Vector3<f64> {
        let e = self.core.engine();
        // Archimedes: uniform height on the sphere is uniform area.
        let u = 1.0 - 2.0 * e.next_f64();
        let planar = self.radius * (1.0 - u * u).max(0.0).sqrt();
        let t = TAU * e.next_f64();
        Vector3::new(planar * t.cos(), planar * t.sin(), self.radius * u)
    }
    fn core(&self) -> &SamplerCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }
}
