use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::Result;
use crate::geometry::Object;
use crate::intersection::{Hit, Intersection};
use crate::light::Light;
use crate::material::Material;
use crate::parse;
use crate::ray::Ray;
use crate::raster::Raster;
use crate::vec3::{Color, Vec3};

/// Offset along the normal for secondary rays, keeps them off their own surface.
pub const SURFACE_EPSILON: f64 = 1e-6;

/// Everything needed to render one image. Read-only once built.
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub objects: Vec<Object>,

    /// Maximal number of mirror bounces.
    pub depth: u32,
    pub background: Color,
    pub ambience: Color,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
            depth: 0,
            background: Vec3::ZERO,
            ambience: Vec3::ZERO,
        }
    }

    /// Reads a scene from disk. `.json` files use the JSON layout, everything else the
    /// token based `.sce` layout.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let scene = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => parse::json::read_scene(path)?,
            _ => parse::sce::read_scene(path)?,
        };

        info!(
            "loaded {}: {} objects, {} lights, {}x{}",
            path.display(),
            scene.num_objects(),
            scene.lights.len(),
            scene.camera.width,
            scene.camera.height
        );

        Ok(scene)
    }

    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    /// Nearest hit over all objects.
    pub fn closest_intersection(&self, ray: &Ray<f64>) -> Option<Hit<'_>> {
        let mut t = f64::INFINITY;
        let mut closest = None;

        for object in &self.objects {
            if let Some(intersection) = object.geometry.intersection(ray) {
                if intersection.t < t {
                    t = intersection.t;
                    closest = Some(Hit { object, intersection });
                }
            }
        }

        closest
    }

    /// Phong shading with hard shadows. `view` points from the surface towards the viewer.
    pub fn lighting(&self, point: Vec3<f64>, normal: Vec3<f64>, view: Vec3<f64>, material: &Material) -> Color {
        let mut color = self.ambience * material.ambient;
        let view = view.unit();

        for light in &self.lights {
            let to_light = light.position - point;
            let distance = to_light.len();
            let l = to_light.unit();

            // Shadows.
            let shadow_ray = Ray::new(point + normal.scale(SURFACE_EPSILON), l);
            if let Some(blocker) = self.closest_intersection(&shadow_ray) {
                if blocker.t() < distance {
                    continue;
                }
            }

            let cos_theta = normal.dot(&l);
            if cos_theta <= 0.0 {
                continue;
            }

            let mut contribution = material.diffuse.scale(cos_theta);

            let cos_alpha = l.mirror(&normal).dot(&view);
            if cos_alpha > 0.0 {
                contribution += material.specular.scale(cos_alpha.powf(material.shininess));
            }

            color += contribution * light.color;
        }

        color
    }

    /// Color seen along `ray` after `depth` mirror bounces so far.
    pub fn trace(&self, ray: &Ray<f64>, depth: u32) -> Color {
        if depth > self.depth {
            return Vec3::ZERO;
        }

        let (material, hit): (&Material, Intersection) = match self.closest_intersection(ray) {
            Some(closest) => (closest.material(), closest.intersection),
            None => return self.background,
        };

        let color = self.lighting(hit.point, hit.normal, ray.direction().inverse(), material);

        if material.mirror <= 0.0 || depth >= self.depth {
            return color;
        }

        let direction = ray.direction().reflect(&hit.normal).unit();
        let reflected = Ray::new(hit.point + hit.normal.scale(SURFACE_EPSILON), direction);
        let reflected_color = self.trace(&reflected, depth + 1);

        color.scale(1.0 - material.mirror) + reflected_color.scale(material.mirror)
    }

    /// Traces every pixel. Columns are rendered in parallel on the current rayon pool;
    /// the result does not depend on the pool size.
    pub fn render(&self) -> Raster {
        let width = self.camera.width;
        let height = self.camera.height;

        info!("ray tracing {}x{} with up to {} threads", width, height, rayon::current_num_threads());
        let now = Instant::now();

        let columns: Vec<Vec<Color>> = (0..width)
            .into_par_iter()
            .with_max_len(1)
            .map(|x| self.render_column(x))
            .collect();

        let mut image = Raster::new(width, height);
        for (x, column) in (0..width).zip(columns) {
            for (y, color) in (0..height).zip(column) {
                image[(x, y)] = color;
            }
        }

        info!("finished, elapsed: {} ms", now.elapsed().as_millis());

        image
    }

    fn render_column(&self, x: u32) -> Vec<Color> {
        let white = Vec3::splat(1.0);

        (0..self.camera.height)
            .map(|y| {
                let ray = self.camera.primary_ray(x, y);
                self.trace(&ray, 0).min(&white)
            })
            .collect()
    }
}
