use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer};

/// RGB triple, nominally in `[0, 1]` per channel.
pub type Color = Vec3<f64>;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        let len = self.len();

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Vec3<f64> {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    #[inline]
    pub fn cross(&self, other: &Vec3<f64>) -> Vec3<f64> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Reflects an incoming direction about `normal`: `v - 2(v·n)n`.
    #[inline]
    pub fn reflect(&self, normal: &Vec3<f64>) -> Vec3<f64> {
        *self - normal.scale(2.0 * self.dot(normal))
    }

    /// Mirrors an outgoing direction (e.g. towards a light) about `normal`: `2(n·v)n - v`.
    #[inline]
    pub fn mirror(&self, normal: &Vec3<f64>) -> Vec3<f64> {
        normal.scale(2.0 * normal.dot(self)) - *self
    }

    #[inline]
    pub fn min(&self, other: &Vec3<f64>) -> Vec3<f64> {
        Vec3 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    #[inline]
    pub fn max(&self, other: &Vec3<f64>) -> Vec3<f64> {
        Vec3 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Vec3<T>) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Componentwise product, used to modulate colors.
impl<T: Mul<Output = T>> Mul for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {}", index),
        }
    }
}

impl<'de> Deserialize<'de> for Vec3<f64> {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = Deserialize::deserialize(de)?;

        Ok(Vec3::new(x, y, z))
    }
}
