//! Diagnostic renders.

use crate::raster::Raster;
use crate::scene::Scene;
use crate::vec3::Vec3;

/// Visualizes bounding box culling: the red channel of each pixel is the number of
/// bounding boxes its primary ray enters, relative to the busiest pixel.
pub fn bounding_box_heatmap(scene: &Scene) -> Raster {
    let camera = &scene.camera;
    let boxes: Vec<_> = scene
        .objects
        .iter()
        .filter_map(|o| o.geometry.bounding_box())
        .collect();

    let mut counts = vec![0usize; camera.width as usize * camera.height as usize];
    for y in 0..camera.height {
        for x in 0..camera.width {
            let ray = camera.primary_ray(x, y);
            counts[y as usize * camera.width as usize + x as usize] = boxes.iter().filter(|b| b.intersects(&ray)).count();
        }
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    info!("{} bounding boxes, at most {} per pixel", boxes.len(), max);

    let mut image = Raster::new(camera.width, camera.height);
    if max == 0 {
        return image;
    }

    for y in 0..camera.height {
        for x in 0..camera.width {
            let count = counts[y as usize * camera.width as usize + x as usize];
            image[(x, y)] = Vec3::new(count as f64 / max as f64, 0.0, 0.0);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::geometry::{Mesh, Object, Shading, Sphere};
    use crate::material::Material;

    fn scene() -> Scene {
        Scene::new(Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            45.0,
            9,
            9,
        ))
    }

    fn square(z: f64) -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(-0.5, -0.5, z),
                Vec3::new(0.5, -0.5, z),
                Vec3::new(0.5, 0.5, z),
                Vec3::new(-0.5, 0.5, z),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
            Shading::Flat,
        )
    }

    #[test]
    fn counts_overlapping_boxes() {
        let mut scene = scene();
        scene.objects.push(Object::new(square(0.0), Material::default()));
        scene.objects.push(Object::new(square(1.0), Material::default()));
        // Spheres carry no box and are ignored.
        scene.objects.push(Object::new(Sphere::new(Vec3::ZERO, 3.0), Material::default()));

        let heatmap = bounding_box_heatmap(&scene);

        assert_eq!(Vec3::new(1.0, 0.0, 0.0), heatmap[(4, 4)]);
        assert_eq!(Vec3::ZERO, heatmap[(0, 0)]);
    }

    #[test]
    fn no_boxes_gives_black_image() {
        let heatmap = bounding_box_heatmap(&scene());
        assert!(heatmap.pixels().iter().all(|&p| p == Vec3::ZERO));
    }
}
