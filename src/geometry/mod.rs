use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;

mod bbox;
mod cylinder;
mod mesh;
mod plane;
mod sphere;

pub use self::bbox::BoundingBox;
pub use self::cylinder::Cylinder;
pub use self::mesh::{Mesh, Shading, Triangle, Vertex};
pub use self::plane::Plane;
pub use self::sphere::Sphere;

/// Anything a ray can hit.
pub trait Geometry: Send + Sync {
    /// Nearest hit with `t > 0`, if any.
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection>;

    /// Culling box, for shapes that carry one.
    fn bounding_box(&self) -> Option<&BoundingBox> {
        None
    }
}

/// A shape together with the material it owns.
pub struct Model<G> {
    pub geometry: G,
    pub material: Material,
}

pub type Object = Model<Box<dyn Geometry>>;

impl Object {
    pub fn new<G: Geometry + 'static>(geometry: G, material: Material) -> Self {
        Model {
            geometry: Box::new(geometry),
            material,
        }
    }
}
