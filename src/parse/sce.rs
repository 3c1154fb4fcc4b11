//! Token based scene files.
//!
//! ```text
//! depth 2
//! camera  0 0 5  0 0 0  0 1 0  45  640 480
//! background 0 0 0
//! ambience 0.2 0.2 0.2
//! light   0 10 10  1 1 1
//! sphere  0 0 0  1  <material>
//! plane   0 -1 0  0 1 0  <material>
//! cylinder  0 0 0  0.5  0 1 0  2  <material>
//! mesh  bunny.off PHONG  <material>
//! ```
//!
//! where `<material>` is `ambient(3) diffuse(3) specular(3) shininess mirror`.

use std::fs;
use std::path::Path;

use crate::camera::Camera;
use crate::error::{LoadError, Result};
use crate::geometry::{Cylinder, Object, Plane, Shading, Sphere};
use crate::light::Light;
use crate::parse::off;
use crate::parse::tokens::Tokens;
use crate::scene::Scene;
use crate::vec3::Vec3;

pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    parse_scene(&text, base)
}

/// Parses scene text; mesh files are looked up relative to `base`.
pub fn parse_scene(text: &str, base: &Path) -> Result<Scene> {
    let mut tokens = Tokens::new(text);

    let mut camera = None;
    let mut depth = 0;
    let mut background = Vec3::ZERO;
    let mut ambience = Vec3::ZERO;
    let mut lights = Vec::new();
    let mut objects = Vec::new();

    while let Some(token) = tokens.next() {
        trace!("scene entity {}", token);

        match token {
            "depth" => depth = tokens.parse("depth")?,
            "camera" => {
                camera = Some(Camera::new(
                    tokens.vec3("camera eye")?,
                    tokens.vec3("camera center")?,
                    tokens.vec3("camera up")?,
                    tokens.parse("camera fovy")?,
                    tokens.parse("camera width")?,
                    tokens.parse("camera height")?,
                ))
            }
            "background" => background = tokens.vec3("background")?,
            "ambience" => ambience = tokens.vec3("ambience")?,
            "light" => lights.push(Light::new(tokens.vec3("light position")?, tokens.vec3("light color")?)),
            "plane" => {
                let plane = Plane::new(tokens.vec3("plane center")?, tokens.vec3("plane normal")?);
                objects.push(Object::new(plane, tokens.material()?));
            }
            "sphere" => {
                let sphere = Sphere::new(tokens.vec3("sphere center")?, tokens.parse("sphere radius")?);
                objects.push(Object::new(sphere, tokens.material()?));
            }
            "cylinder" => {
                let cylinder = Cylinder::new(
                    tokens.vec3("cylinder center")?,
                    tokens.parse("cylinder radius")?,
                    tokens.vec3("cylinder axis")?,
                    tokens.parse("cylinder height")?,
                );
                objects.push(Object::new(cylinder, tokens.material()?));
            }
            "mesh" => {
                let file = tokens.expect("mesh file")?;
                let shading: Shading = tokens.expect("mesh shading")?.parse()?;
                let mesh = off::read_mesh(base.join(file), shading)?;
                objects.push(Object::new(mesh, tokens.material()?));
            }
            other => return Err(LoadError::UnknownToken(other.to_string())),
        }
    }

    let mut scene = Scene::new(camera.ok_or(LoadError::MissingCamera)?);
    scene.depth = depth;
    scene.background = background;
    scene.ambience = ambience;
    scene.lights = lights;
    scene.objects = objects;

    Ok(scene)
}
