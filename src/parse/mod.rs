//! Scene and mesh readers.

pub mod json;
pub mod off;
pub mod sce;
mod tokens;
