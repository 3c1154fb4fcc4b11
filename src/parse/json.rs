//! JSON scene files.
//!
//! ```json
//! {
//!     "depth": 2,
//!     "camera": { "eye": [0, 0, 5], "center": [0, 0, 0], "up": [0, 1, 0],
//!                 "fovy": 45, "width": 640, "height": 480 },
//!     "background": [0, 0, 0],
//!     "ambience": [0.2, 0.2, 0.2],
//!     "lights": [ { "position": [0, 10, 10], "color": [1, 1, 1] } ],
//!     "objects": [
//!         { "type": "sphere", "center": [0, 0, 0], "radius": 1, "material": { ... } },
//!         { "type": "mesh", "path": "bunny.off", "shading": "PHONG", "material": { ... } }
//!     ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::camera::Camera;
use crate::error::{LoadError, Result};
use crate::geometry::{Cylinder, Object, Plane, Shading, Sphere};
use crate::light::Light;
use crate::material::Material;
use crate::parse::off;
use crate::scene::Scene;
use crate::vec3::{Color, Vec3};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDescription {
    #[serde(default)]
    depth: u32,
    camera: CameraDescription,
    #[serde(default)]
    background: Color,
    #[serde(default)]
    ambience: Color,
    #[serde(default)]
    lights: Vec<Light>,
    #[serde(default)]
    objects: Vec<ObjectDescription>,
}

#[derive(Debug, Deserialize)]
struct CameraDescription {
    eye: Vec3<f64>,
    center: Vec3<f64>,
    up: Vec3<f64>,
    fovy: f64,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct ObjectDescription {
    #[serde(flatten)]
    shape: ShapeDescription,
    material: Material,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ShapeDescription {
    Plane {
        center: Vec3<f64>,
        normal: Vec3<f64>,
    },
    Sphere {
        center: Vec3<f64>,
        radius: f64,
    },
    Cylinder {
        center: Vec3<f64>,
        radius: f64,
        axis: Vec3<f64>,
        height: f64,
    },
    Mesh {
        path: PathBuf,
        shading: Shading,
    },
}

pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let description: SceneDescription = serde_json::from_reader(BufReader::new(file))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    build(description, base)
}

/// Parses JSON scene text; mesh files are looked up relative to `base`.
pub fn parse_scene(text: &str, base: &Path) -> Result<Scene> {
    build(serde_json::from_str(text)?, base)
}

fn build(description: SceneDescription, base: &Path) -> Result<Scene> {
    let c = description.camera;
    let mut scene = Scene::new(Camera::new(c.eye, c.center, c.up, c.fovy, c.width, c.height));

    scene.depth = description.depth;
    scene.background = description.background;
    scene.ambience = description.ambience;
    scene.lights = description.lights;

    for object in description.objects {
        let material = object.material;
        let object = match object.shape {
            ShapeDescription::Plane { center, normal } => Object::new(Plane::new(center, normal), material),
            ShapeDescription::Sphere { center, radius } => Object::new(Sphere::new(center, radius), material),
            ShapeDescription::Cylinder {
                center,
                radius,
                axis,
                height,
            } => Object::new(Cylinder::new(center, radius, axis, height), material),
            ShapeDescription::Mesh { path, shading } => {
                Object::new(off::read_mesh(base.join(path), shading)?, material)
            }
        };
        scene.objects.push(object);
    }

    Ok(scene)
}
