use crate::vec3::Color;

/// Phong surface parameters plus mirror reflectivity.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f64,
    /// 1 is a perfect mirror, 0 no reflection at all.
    pub mirror: f64,
}
