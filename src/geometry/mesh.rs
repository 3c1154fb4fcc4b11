//! Triangle meshes with flat or interpolated shading.

use std::str::FromStr;

use crate::error::LoadError;
use crate::geometry::{BoundingBox, Geometry};
use crate::intersection::Intersection;
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Below this the ray is taken to lie in the triangle's plane.
const DEGENERATE_DETERMINANT: f64 = 1e-12;
const DEGENERATE_NORMAL: f64 = 1e-12;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shading {
    /// Every point of a triangle reports its face normal.
    Flat,
    /// Vertex normals are interpolated across the triangle.
    Phong,
}

impl FromStr for Shading {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FLAT" => Ok(Shading::Flat),
            "PHONG" => Ok(Shading::Phong),
            other => Err(LoadError::InvalidShading(other.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3<f64>,
    /// Angle-weighted average of the incident face normals.
    pub normal: Vec3<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub normal: Vec3<f64>,
}

#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    shading: Shading,
    bbox: BoundingBox,
}

impl Mesh {
    /// Builds the mesh and derives its normals and bounding box.
    ///
    /// Every face index must be smaller than `positions.len()`.
    pub fn new(positions: Vec<Vec3<f64>>, faces: Vec<[usize; 3]>, shading: Shading) -> Self {
        let vertices: Vec<Vertex> = positions
            .into_iter()
            .map(|position| Vertex {
                position,
                normal: Vec3::ZERO,
            })
            .collect();

        let triangles = faces
            .into_iter()
            .map(|indices| Triangle {
                indices,
                normal: Vec3::ZERO,
            })
            .collect();

        let bbox = BoundingBox::from_points(vertices.iter().map(|v| &v.position));

        let mut mesh = Self {
            vertices,
            triangles,
            shading,
            bbox,
        };

        mesh.compute_normals();

        debug!(
            "mesh: {} vertices, {} triangles, bounds {:?}..{:?}",
            mesh.vertices.len(),
            mesh.triangles.len(),
            mesh.bbox.min,
            mesh.bbox.max
        );

        mesh
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    /// Triangles worth testing against `ray`: all of them when the ray enters the
    /// bounding box, none otherwise.
    pub fn candidates(&self, ray: &Ray<f64>) -> &[Triangle] {
        if self.bbox.intersects(ray) {
            &self.triangles
        } else {
            &[]
        }
    }

    fn compute_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.normal = Vec3::ZERO;
        }

        for triangle in &mut self.triangles {
            let [i0, i1, i2] = triangle.indices;
            let p0 = self.vertices[i0].position;
            let p1 = self.vertices[i1].position;
            let p2 = self.vertices[i2].position;

            let n = (p1 - p0).cross(&(p2 - p0));
            let len = n.len();
            if len == 0.0 {
                // Degenerate triangle, nothing sensible to contribute.
                triangle.normal = Vec3::ZERO;
                continue;
            }
            triangle.normal = n.scale(1.0 / len);

            let weights = angle_weights(p0, p1, p2);
            for (&i, &w) in triangle.indices.iter().zip(weights.iter()) {
                self.vertices[i].normal += triangle.normal.scale(w);
            }
        }

        for vertex in &mut self.vertices {
            if vertex.normal != Vec3::ZERO {
                vertex.normal = vertex.normal.unit();
            }
        }
    }

    fn intersect_triangle(&self, triangle: &Triangle, ray: &Ray<f64>) -> Option<Intersection> {
        let [i0, i1, i2] = triangle.indices;
        let p0 = self.vertices[i0].position;
        let p1 = self.vertices[i1].position;
        let p2 = self.vertices[i2].position;

        let d = *ray.direction();
        let e1 = p0 - p1;
        let e2 = p0 - p2;
        let rhs = p0 - ray.origin();

        // t·d + beta·(p0 - p1) + gamma·(p0 - p2) = p0 - o, solved with Cramer's rule.
        let det = determinant(&d, &e1, &e2);
        if det.abs() < DEGENERATE_DETERMINANT {
            return None;
        }

        let t = determinant(&rhs, &e1, &e2) / det;
        let beta = determinant(&d, &rhs, &e2) / det;
        let gamma = determinant(&d, &e1, &rhs) / det;

        if !(t > 0.0 && beta >= 0.0 && gamma >= 0.0 && beta + gamma <= 1.0) {
            return None;
        }

        let normal = match self.shading {
            Shading::Flat => triangle.normal,
            // Not flipped towards the ray. Vertex normals that cancel out fall back to the face.
            Shading::Phong => {
                let alpha = 1.0 - beta - gamma;
                let smooth = self.vertices[i0].normal.scale(alpha)
                    + self.vertices[i1].normal.scale(beta)
                    + self.vertices[i2].normal.scale(gamma);
                if smooth.len() > DEGENERATE_NORMAL {
                    smooth.unit()
                } else {
                    triangle.normal
                }
            }
        };

        Some(Intersection::along(ray, t, normal))
    }
}

impl Geometry for Mesh {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let mut closest: Option<Intersection> = None;

        for triangle in self.candidates(ray) {
            if let Some(hit) = self.intersect_triangle(triangle, ray) {
                if closest.map_or(true, |c| hit.t < c.t) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }

    fn bounding_box(&self) -> Option<&BoundingBox> {
        Some(&self.bbox)
    }
}

/// Interior angles at `p0`, `p1` and `p2`.
fn angle_weights(p0: Vec3<f64>, p1: Vec3<f64>, p2: Vec3<f64>) -> [f64; 3] {
    let e01 = (p1 - p0).unit();
    let e12 = (p2 - p1).unit();
    let e20 = (p0 - p2).unit();

    let angle = |a: Vec3<f64>, b: Vec3<f64>| a.dot(&b).max(-1.0).min(1.0).acos();

    [angle(e01, -e20), angle(e12, -e01), angle(e20, -e12)]
}

/// Scalar triple product `a · (b × c)`.
#[inline]
fn determinant(a: &Vec3<f64>, b: &Vec3<f64>, c: &Vec3<f64>) -> f64 {
    a.dot(&b.cross(c))
}
