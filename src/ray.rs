use crate::vec3::Vec3;

/// Half-line with a unit direction. Immutable once built.
#[derive(Copy, Clone, Debug)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl Ray<f64> {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self {
            origin,
            direction: direction.unit(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}

#[test]
fn direction_is_normalized() {
    let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 3.0, 4.0));

    assert!((ray.direction().len() - 1.0).abs() < 1e-12);
    assert_eq!(Vec3::new(1.0, 2.0 + 0.6 * 5.0, 3.0 + 0.8 * 5.0), ray.offset(5.0));
}
