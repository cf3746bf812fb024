use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Coord3};

/// Axis-aligned bounding box, `min <= max` componentwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Coord,
    pub max: Coord,
}

impl Aabb {
    /// Tightest box around `points`; `None` when there are none.
    pub fn from_points<I, P>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Coord3,
    {
        let mut it = points.into_iter();
        let first = it.next()?.to_vector3();
        let (lo, hi) = it.fold((first, first), |(lo, hi), p| {
            let v = p.to_vector3();
            (lo.inf(&v), hi.sup(&v))
        });
        Some(Self {
            min: Coord::from(lo),
            max: Coord::from(hi),
        })
    }

    pub fn center(&self) -> Coord {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Coord {
        self.max - self.min
    }

    /// Closed containment test.
    pub fn contains<P: Coord3 + ?Sized>(&self, p: &P) -> bool {
        let v = p.to_vector3();
        (0..3).all(|k| self.min.as_vector3()[k] <= v[k] && v[k] <= self.max.as_vector3()[k])
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Coord::from(self.min.as_vector3().inf(other.min.as_vector3())),
            max: Coord::from(self.max.as_vector3().sup(other.max.as_vector3())),
        }
    }
}
