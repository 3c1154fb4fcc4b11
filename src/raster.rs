use std::ops::{Index, IndexMut};
use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

use crate::vec3::{Color, Vec3};

/// Floating point image, row-major with row 0 at the bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        y as usize * self.width as usize + x as usize
    }

    /// 8 bit RGB copy with the top scanline first.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, row| {
            let c = self[(x, self.height - 1 - row)];
            Rgb([to_byte(c.x), to_byte(c.y), to_byte(c.z)])
        })
    }

    /// Writes the image; the format follows the extension (`.bmp`, `.tga`, `.png`, ...).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        info!("writing image to {}", path.display());
        self.to_rgb_image().save(path)
    }
}

impl Index<(u32, u32)> for Raster {
    type Output = Color;

    #[inline]
    fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
        &self.pixels[self.offset(x, y)]
    }
}

impl IndexMut<(u32, u32)> for Raster {
    #[inline]
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Self::Output {
        let offset = self.offset(x, y);
        &mut self.pixels[offset]
    }
}

/// Maps `[0, 1]` to `[0, 255]`, clamping out of range values.
#[inline]
fn to_byte(v: f64) -> u8 {
    (255.0 * v.max(0.0).min(1.0)) as u8
}
