use crate::ray::Ray;
use crate::vec3::Vec3;

/// Pinhole camera looking from `eye` towards `center`.
///
/// Pixel `(0, 0)` is the lower left corner of the image plane, so row 0 is the bottom
/// scanline.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub eye: Vec3<f64>,
    pub center: Vec3<f64>,
    pub up: Vec3<f64>,
    /// Vertical opening angle in degrees.
    pub fovy: f64,
    pub width: u32,
    pub height: u32,

    x_dir: Vec3<f64>,
    y_dir: Vec3<f64>,
    lower_left: Vec3<f64>,
}

impl Camera {
    pub fn new(eye: Vec3<f64>, center: Vec3<f64>, up: Vec3<f64>, fovy: f64, width: u32, height: u32) -> Self {
        let view = center - eye;
        let distance = view.len();
        let image_height = 2.0 * distance * (0.5 * fovy.to_radians()).tan();
        let image_width = width as f64 / height as f64 * image_height;

        let view = view.unit();
        let x_dir = view.cross(&up).unit().scale(image_width / width as f64);
        let y_dir = x_dir.cross(&view).unit().scale(image_height / height as f64);
        let lower_left = center - x_dir.scale(0.5 * width as f64) - y_dir.scale(0.5 * height as f64);

        Self {
            eye,
            center,
            up,
            fovy,
            width,
            height,
            x_dir,
            y_dir,
            lower_left,
        }
    }

    pub fn primary_ray(&self, x: u32, y: u32) -> Ray<f64> {
        let target = self.lower_left + self.x_dir.scale(x as f64) + self.y_dir.scale(y as f64);
        Ray::new(self.eye, target - self.eye)
    }
}
