use crate::geometry::Geometry;
use crate::intersection::Intersection;
use crate::quadratic::solve_quadratic;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Open cylinder: the lateral surface only, `height` long and centered on `center`.
#[derive(Copy, Clone, Debug)]
pub struct Cylinder {
    center: Vec3<f64>,
    radius: f64,
    axis: Vec3<f64>,
    height: f64,
}

impl Cylinder {
    pub fn new(center: Vec3<f64>, radius: f64, axis: Vec3<f64>, height: f64) -> Self {
        Self {
            center,
            radius,
            axis: axis.unit(),
            height,
        }
    }

    /// Component of `v` perpendicular to the axis.
    #[inline]
    fn radial(&self, v: Vec3<f64>) -> Vec3<f64> {
        v - self.axis.scale(v.dot(&self.axis))
    }
}

impl Geometry for Cylinder {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let m = self.radial(ray.origin() - self.center);
        let d = self.radial(*ray.direction());

        let a = d.dot(&d);
        let b = 2.0 * m.dot(&d);
        let c = m.dot(&m) - self.radius * self.radius;

        let half_height = 0.5 * self.height;

        // Roots are visited nearest first and the first one inside the height range wins.
        for &t in solve_quadratic(a, b, c).sorted().as_slice() {
            if !(t > 0.0) {
                continue;
            }

            let point = ray.offset(t);
            let h = (point - self.center).dot(&self.axis);
            if h < -half_height || h > half_height {
                continue;
            }

            let mut normal = self.radial(point - self.center).unit();
            if ray.direction().dot(&normal) > 0.0 {
                normal = -normal;
            }

            return Some(Intersection::new(t, point, normal));
        }

        None
    }
}
