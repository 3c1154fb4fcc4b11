use std::fs;
use std::path::Path;
use std::process;

use mirrorball::parse::sce::parse_scene;
use mirrorball::{Ray, Scene, Vec3};

const BACKGROUND: Vec3<f64> = Vec3::new(0.2, 0.3, 0.4);

/// One red sphere in front of the camera, lit from the eye, no ambience, no mirror.
const SINGLE_SPHERE: &str = "
depth 1
camera 0 0 5  0 0 0  0 1 0  45  32 32
background 0.2 0.3 0.4
ambience 0 0 0
light 0 0 10  1 1 1
sphere 0 0 0  1  0 0 0  1 0 0  0 0 0  1  0
";

const MIRROR_ROOM: &str = "
depth 4
camera 0 1 6  0 0 0  0 1 0  50  24 18
background 0.1 0.1 0.3
ambience 0.2 0.2 0.2
light 3 5 5  1 1 1
light -4 3 2  0.4 0.4 0.4
plane 0 -1 0  0 1 0     0.2 0.2 0.2  0.5 0.5 0.5  0 0 0  1  0.3
sphere 0 0 0  1         0.1 0 0  0.7 0.1 0.1  1 1 1  40  0.5
sphere 1.5 0.5 -2  0.7  0 0.1 0  0.1 0.7 0.1  0.5 0.5 0.5  10  0.8
cylinder -1.5 0 -1  0.4  0 1 0  2  0 0 0.1  0.1 0.1 0.7  0 0 0  1  0
";

fn load(text: &str) -> Scene {
    parse_scene(text, Path::new("")).expect("scene parses")
}

#[test]
fn background_outside_the_sphere_silhouette() {
    let scene = load(SINGLE_SPHERE);
    let image = scene.render();

    assert_eq!(32, image.width());
    assert_eq!(32, image.height());

    for y in 0..32 {
        for x in 0..32 {
            let ray = scene.camera.primary_ray(x, y);
            // Distance of the primary ray's line from the sphere center.
            let to_center = Vec3::ZERO - ray.origin();
            let along = to_center.dot(ray.direction());
            let miss_distance = (to_center - ray.direction().scale(along)).len();

            let color = image[(x, y)];
            if miss_distance > 1.0 + 1e-9 {
                assert_eq!(BACKGROUND, color, "pixel ({}, {})", x, y);
            } else if miss_distance < 1.0 - 1e-3 {
                assert_ne!(BACKGROUND, color, "pixel ({}, {})", x, y);
                assert!(color.x > 0.0);
                assert_eq!(0.0, color.y);
                assert_eq!(0.0, color.z);
            }
        }
    }

    assert_eq!(BACKGROUND, image[(0, 0)]);
    assert_eq!(BACKGROUND, image[(31, 31)]);
    assert!(image[(16, 16)].x > 0.9);
}

#[test]
fn channels_never_exceed_one() {
    let mut scene = load(MIRROR_ROOM);
    for light in &mut scene.lights {
        light.color = light.color.scale(10.0);
    }

    let image = scene.render();
    for pixel in image.pixels() {
        assert!(pixel.x <= 1.0 && pixel.y <= 1.0 && pixel.z <= 1.0);
        assert!(pixel.x >= 0.0 && pixel.y >= 0.0 && pixel.z >= 0.0);
    }
}

#[test]
fn output_does_not_depend_on_thread_count() {
    let scene = load(MIRROR_ROOM);

    let single = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let many = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();

    let a = single.install(|| scene.render());
    let b = many.install(|| scene.render());

    assert_eq!(a, b);
}

#[test]
fn every_hit_is_in_front_with_unit_normal() {
    let scene = load(MIRROR_ROOM);

    for y in 0..scene.camera.height {
        for x in 0..scene.camera.width {
            let ray = scene.camera.primary_ray(x, y);
            for object in &scene.objects {
                if let Some(hit) = object.geometry.intersection(&ray) {
                    assert!(hit.t > 0.0);
                    assert!((hit.normal.len() - 1.0).abs() < 1e-6);
                }
            }
        }
    }

    // Rays starting inside shapes too.
    let inside = Ray::new(Vec3::ZERO, Vec3::new(0.3, 0.2, -1.0));
    for object in &scene.objects {
        if let Some(hit) = object.geometry.intersection(&inside) {
            assert!(hit.t > 0.0);
            assert!((hit.normal.len() - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn renders_mesh_scene_from_disk() {
    let dir = std::env::temp_dir().join(format!("mirrorball-render-{}", process::id()));
    fs::create_dir_all(&dir).unwrap();

    fs::write(
        dir.join("tetra.off"),
        "OFF\n4 4 0\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n3 0 2 1\n3 0 1 3\n3 0 3 2\n3 1 2 3\n",
    )
    .unwrap();
    let scene_path = dir.join("tetra.sce");
    fs::write(
        &scene_path,
        "depth 0
camera 2 2 2  0.25 0.25 0.25  0 0 1  40  16 16
background 0 0 0
ambience 0.1 0.1 0.1
light 5 5 5  1 1 1
mesh tetra.off PHONG  1 1 1  0.8 0.8 0.8  0 0 0  1  0
",
    )
    .unwrap();

    let scene = Scene::load(&scene_path).unwrap();
    let image = scene.render();

    // The tetrahedron sits in the middle of the frame, the corners show background.
    assert_ne!(Vec3::ZERO, image[(8, 8)]);
    assert_eq!(Vec3::ZERO, image[(0, 0)]);

    let output = dir.join("tetra.bmp");
    image.save(&output).unwrap();
    let bytes = fs::read(&output).unwrap();
    assert_eq!(b"BM", &bytes[..2]);
    // 24 bits per pixel.
    assert_eq!(24, u16::from_le_bytes([bytes[28], bytes[29]]));

    fs::remove_dir_all(&dir).unwrap();
}
