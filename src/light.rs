use crate::vec3::{Color, Vec3};

/// Point light without falloff.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Light {
    pub position: Vec3<f64>,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3<f64>, color: Color) -> Self {
        Self { position, color }
    }
}
