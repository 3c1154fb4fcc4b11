//! Whitted style ray tracer: Phong lighting, hard shadows and mirror reflections over
//! planes, spheres, open cylinders and triangle meshes.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod material;
pub mod parse;
pub mod quadratic;
pub mod raster;
pub mod ray;
pub mod scene;
pub mod vec3;

pub use crate::camera::Camera;
pub use crate::error::LoadError;
pub use crate::geometry::{Cylinder, Geometry, Mesh, Model, Object, Plane, Shading, Sphere};
pub use crate::intersection::{Hit, Intersection};
pub use crate::light::Light;
pub use crate::material::Material;
pub use crate::raster::Raster;
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::vec3::{Color, Vec3};
