use crate::geometry::Geometry;
use crate::intersection::Intersection;
use crate::quadratic::solve_quadratic;
use crate::ray::Ray;
use crate::vec3::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Geometry for Sphere {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let oc = ray.origin() - self.center;

        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(&oc) - self.radius.powi(2);

        let t = solve_quadratic(a, b, c)
            .sorted()
            .as_slice()
            .iter()
            .copied()
            .find(|&t| t > 0.0)?;

        let point = ray.offset(t);
        let normal = (point - self.center).unit();

        Some(Intersection::new(t, point, normal))
    }
}
