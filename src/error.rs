//! Errors raised while loading scenes and meshes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid token encountered: {0}")]
    UnknownToken(String),

    #[error("invalid shading mode {0}, expected FLAT or PHONG")]
    InvalidShading(String),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("cannot read {expected} from {token:?}")]
    InvalidNumber { token: String, expected: &'static str },

    #[error("not an OFF file, header is {0:?}")]
    NotOff(String),

    #[error("only triangles are supported, found a face with {0} vertices")]
    UnsupportedFace(usize),

    #[error("vertex index {index} out of range for {count} vertices")]
    VertexIndex { index: usize, count: usize },

    #[error("scene has no camera")]
    MissingCamera,

    #[error("malformed JSON scene: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
