use crate::geometry::Object;
use crate::material::Material;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Where a ray meets a surface. `t` is always strictly positive and `normal` unit length.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub t: f64,
    pub point: Vec3<f64>,
    pub normal: Vec3<f64>,
}

impl Intersection {
    pub fn new(t: f64, point: Vec3<f64>, normal: Vec3<f64>) -> Self {
        Self { t, point, normal }
    }

    /// Hit at parameter `t` along `ray`.
    #[inline]
    pub fn along(ray: &Ray<f64>, t: f64, normal: Vec3<f64>) -> Self {
        Self::new(t, ray.offset(t), normal)
    }
}

/// Nearest intersection over a whole scene together with the object that was hit.
#[derive(Copy, Clone)]
pub struct Hit<'a> {
    pub object: &'a Object,
    pub intersection: Intersection,
}

impl<'a> Hit<'a> {
    #[inline]
    pub fn t(&self) -> f64 {
        self.intersection.t
    }

    #[inline]
    pub fn material(&self) -> &'a Material {
        &self.object.material
    }
}
