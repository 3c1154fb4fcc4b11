use crate::geometry::Geometry;
use crate::intersection::Intersection;
use crate::ray::Ray;
use crate::vec3::Vec3;

const PARALLEL_EPSILON: f64 = 1e-9;

/// Infinite two-sided plane through `center`.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    center: Vec3<f64>,
    normal: Vec3<f64>,
}

impl Plane {
    pub fn new(center: Vec3<f64>, normal: Vec3<f64>) -> Self {
        Self {
            center,
            normal: normal.unit(),
        }
    }
}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let denominator = self.normal.dot(ray.direction());
        if denominator.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -self.normal.dot(&(ray.origin() - self.center)) / denominator;
        if !(t > 0.0) {
            return None;
        }

        Some(Intersection::along(ray, t, self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0))
    }

    #[test]
    fn zero_direction_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        assert!(floor().intersection(&ray).is_none());
    }

    #[test]
    fn hit_from_above() {
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = floor().intersection(&ray).unwrap();

        assert_eq!(3.0, hit.t);
        assert_eq!(Vec3::ZERO, hit.point);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), hit.normal);
    }

    #[test]
    fn normal_is_not_flipped_from_below() {
        let ray = Ray::new(Vec3::new(1.0, -2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let hit = floor().intersection(&ray).unwrap();

        assert_eq!(2.0, hit.t);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), hit.normal);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(floor().intersection(&ray).is_none());
    }

    #[test]
    fn plane_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(floor().intersection(&ray).is_none());
    }
}
