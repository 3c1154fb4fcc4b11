//! Minimal OFF reader: triangle soups only.

use std::fs;
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::geometry::{Mesh, Shading};
use crate::parse::tokens::Tokens;
use crate::vec3::Vec3;

pub struct OffData {
    pub positions: Vec<Vec3<f64>>,
    pub faces: Vec<[usize; 3]>,
}

pub fn parse_off(text: &str) -> Result<OffData> {
    let mut tokens = Tokens::new(text);

    let header = tokens.expect("OFF header")?;
    if header != "OFF" {
        return Err(LoadError::NotOff(header.to_string()));
    }

    let vertex_count: usize = tokens.parse("vertex count")?;
    let face_count: usize = tokens.parse("face count")?;
    let _edge_count: usize = tokens.parse("edge count")?;

    let positions = (0..vertex_count)
        .map(|_| tokens.vec3("vertex position"))
        .collect::<Result<Vec<_>>>()?;

    let mut faces = Vec::new();
    for _ in 0..face_count {
        let degree: usize = tokens.parse("face degree")?;
        if degree != 3 {
            return Err(LoadError::UnsupportedFace(degree));
        }

        let mut face = [0; 3];
        for index in face.iter_mut() {
            *index = tokens.parse("face index")?;
            if *index >= vertex_count {
                return Err(LoadError::VertexIndex {
                    index: *index,
                    count: vertex_count,
                });
            }
        }
        faces.push(face);
    }

    Ok(OffData { positions, faces })
}

pub fn read_mesh<P: AsRef<Path>>(path: P, shading: Shading) -> Result<Mesh> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let off = parse_off(&text)?;

    info!(
        "read {}: {} vertices, {} triangles",
        path.display(),
        off.positions.len(),
        off.faces.len()
    );

    Ok(Mesh::new(off.positions, off.faces, shading))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TETRAHEDRON: &str = "OFF
4 4 0
0 0 0
1 0 0
0 1 0
0 0 1
3 0 2 1
3 0 1 3
3 0 3 2
3 1 2 3
";

    #[test]
    fn reads_tetrahedron() {
        let off = parse_off(TETRAHEDRON).unwrap();

        assert_eq!(4, off.positions.len());
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), off.positions[3]);
        assert_eq!(vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]], off.faces);
    }

    #[test]
    fn rejects_other_headers() {
        assert!(matches!(parse_off("PLY 1 2 3"), Err(LoadError::NotOff(h)) if h == "PLY"));
    }

    #[test]
    fn rejects_quads() {
        let quad = "OFF 4 1 0  0 0 0  1 0 0  1 1 0  0 1 0  4 0 1 2 3";
        assert!(matches!(parse_off(quad), Err(LoadError::UnsupportedFace(4))));
    }

    #[test]
    fn rejects_dangling_indices() {
        let text = "OFF 3 1 0  0 0 0  1 0 0  0 1 0  3 0 1 3";
        assert!(matches!(
            parse_off(text),
            Err(LoadError::VertexIndex { index: 3, count: 3 })
        ));
    }

    #[test]
    fn rejects_truncated_files() {
        let text = "OFF 3 1 0  0 0 0  1 0 0";
        assert!(matches!(parse_off(text), Err(LoadError::UnexpectedEof(_))));
    }

    #[test]
    fn rejects_absurd_counts() {
        let faces = "OFF 3 4294967295 0  0 0 0  1 0 0  0 1 0";
        assert!(matches!(parse_off(faces), Err(LoadError::UnexpectedEof(_))));

        let vertices = "OFF 4294967295 1 0  0 0 0";
        assert!(matches!(parse_off(vertices), Err(LoadError::UnexpectedEof(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_mesh("/nonexistent/mesh.off", Shading::Flat).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
