//! Serializable sampler description.
//!
//! ```json
//! { "shape": "sphere_surface", "radius": 2.0, "seed": 7, "offset": [0, 0, 1] }
//! ```

use serde::{Deserialize, Serialize};

use super::{
    RandomBox, RandomCircle, RandomDisk, RandomInCylinder, RandomInSphere, RandomLine,
    RandomOnCylinder, RandomOnSphere, RandomPoint, RandomRectangle,
};
use crate::coord::Coord;
use crate::error::GeomError;

fn check_finite(name: &'static str, c: &[f64; 3]) -> Result<(), GeomError> {
    if c.iter().any(|x| !x.is_finite()) {
        return Err(GeomError::invalid(
            name,
            format!("components must be finite, got {c:?}"),
        ));
    }
    Ok(())
}

fn one() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SamplerShape {
    Box {
        #[serde(default = "one")]
        x: f64,
        #[serde(default = "one")]
        y: f64,
        #[serde(default = "one")]
        z: f64,
    },
    Rectangle {
        #[serde(default = "one")]
        x: f64,
        #[serde(default = "one")]
        y: f64,
    },
    Circle {
        #[serde(default = "one")]
        radius: f64,
    },
    Disk {
        #[serde(default = "one")]
        radius: f64,
    },
    Line { start: [f64; 3], end: [f64; 3] },
    CylinderVolume {
        #[serde(default = "one")]
        radius: f64,
        #[serde(default = "one")]
        height: f64,
    },
    CylinderMantle {
        #[serde(default = "one")]
        radius: f64,
        #[serde(default = "one")]
        height: f64,
    },
    SphereVolume {
        #[serde(default = "one")]
        radius: f64,
    },
    SphereSurface {
        #[serde(default = "one")]
        radius: f64,
    },
}

/// Shape plus optional seed (entropy when absent) and offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplerSpec {
    #[serde(flatten)]
    pub shape: SamplerShape,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub offset: [f64; 3],
}

impl SamplerSpec {
    pub fn new(shape: SamplerShape) -> Self {
        Self {
            shape,
            seed: None,
            offset: [0.0; 3],
        }
    }

    /// Instantiate the described sampler. Parameters go through the same
    /// setters as hand-built samplers, so invalid values fail identically.
    pub fn build(&self) -> Result<Box<dyn RandomPoint>, GeomError> {
        check_finite("offset", &self.offset)?;
        let seed = self.seed.unwrap_or_else(rand::random::<u64>);
        let mut sampler: Box<dyn RandomPoint> = match self.shape {
            SamplerShape::Box { x, y, z } => {
                let mut s = RandomBox::with_seed(seed);
                s.set_size(x, y, z)?;
                Box::new(s)
            }
            SamplerShape::Rectangle { x, y } => {
                let mut s = RandomRectangle::with_seed(seed);
                s.set_size(x, y)?;
                Box::new(s)
            }
            SamplerShape::Circle { radius } => {
                let mut s = RandomCircle::with_seed(seed);
                s.set_radius(radius)?;
                Box::new(s)
            }
            SamplerShape::Disk { radius } => {
                let mut s = RandomDisk::with_seed(seed);
                s.set_radius(radius)?;
                Box::new(s)
            }
            SamplerShape::Line { start, end } => {
                check_finite("start", &start)?;
                check_finite("end", &end)?;
                Box::new(RandomLine::with_seed(
                    &Coord::from(start),
                    &Coord::from(end),
                    seed,
                ))
            }
            SamplerShape::CylinderVolume { radius, height } => {
                let mut s = RandomInCylinder::with_seed(seed);
                s.set_radius(radius)?.set_height(height)?;
                Box::new(s)
            }
            SamplerShape::CylinderMantle { radius, height } => {
                let mut s = RandomOnCylinder::with_seed(seed);
                s.set_radius(radius)?.set_height(height)?;
                Box::new(s)
            }
            SamplerShape::SphereVolume { radius } => {
                let mut s = RandomInSphere::with_seed(seed);
                s.set_radius(radius)?;
                Box::new(s)
            }
            SamplerShape::SphereSurface { radius } => {
                let mut s = RandomOnSphere::with_seed(seed);
                s.set_radius(radius)?;
                Box::new(s)
            }
        };
        sampler.set_offset(Coord::from(self.offset));
        tracing::debug!(shape = ?self.shape, seed, "built sampler");
        Ok(sampler)
    }
}
