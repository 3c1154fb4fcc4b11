use std::mem;

use crate::ray::Ray;
use crate::vec3::Vec3;

/// Below this a direction component counts as parallel to its slab.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3<f64>,
    pub max: Vec3<f64>,
}

impl BoundingBox {
    /// Tightest box around `points`. Empty input yields an inverted box that nothing hits.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Vec3<f64>>,
    {
        points.into_iter().fold(
            BoundingBox {
                min: Vec3::splat(f64::MAX),
                max: Vec3::splat(f64::MIN),
            },
            |bbox, p| BoundingBox {
                min: bbox.min.min(p),
                max: bbox.max.max(p),
            },
        )
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Slab test: narrows `[t_min, t_max]` axis by axis and gives up as soon as the
    /// interval is empty or lies behind the origin.
    pub fn intersects(&self, ray: &Ray<f64>) -> bool {
        if self.is_empty() {
            return false;
        }

        let origin = ray.origin();
        let direction = ray.direction();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];

            if d.abs() < PARALLEL_EPSILON {
                if o < self.min[axis] || o > self.max[axis] {
                    return false;
                }
                continue;
            }

            let mut t0 = (self.min[axis] - o) / d;
            let mut t1 = (self.max[axis] - o) / d;
            if t0 > t1 {
                mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);

            if t_min > t_max || t_max < 0.0 {
                return false;
            }
        }

        true
    }
}
