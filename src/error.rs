//! # Error Types
//!
//! Recoverable failures of the crate. Geometry generation itself cannot fail at
//! runtime; these errors come from validating meshes that were loaded or
//! assembled elsewhere, from reading configuration and from writing exports.

use thiserror::Error;

/// Errors raised while interpreting or validating mesh data.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A face side index outside of `0..=5`.
    #[error("face side index {0} is out of range [0..5]")]
    UnknownFaceSide(i32),

    /// A face side name that does not match any side.
    #[error("unknown face side name '{0}'")]
    UnknownFaceSideName(String),

    /// The per-vertex streams disagree on how many vertices the mesh has.
    #[error(
        "vertex streams disagree: positions={positions}, normals={normals}, tangents={tangents}, bitangents={bitangents}, uvs={uvs}"
    )]
    StreamLengthMismatch {
        /// Vertices described by the position stream
        positions: usize,
        /// Vertices described by the normal stream
        normals: usize,
        /// Vertices described by the tangent stream
        tangents: usize,
        /// Vertices described by the bitangent stream
        bitangents: usize,
        /// Vertices described by the uv stream
        uvs: usize,
    },

    /// A stream holds a number of floats that is not a whole number of vertices.
    #[error("stream '{stream}' holds {len} floats, not a multiple of {stride}")]
    PartialVertex {
        /// Name of the offending stream
        stream: &'static str,
        /// Number of floats in the stream
        len: usize,
        /// Floats per vertex for that stream
        stride: usize,
    },

    /// The index stream does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotTriangles(usize),

    /// An index refers to a vertex that does not exist.
    #[error("index {index} references a vertex past the end (vertex count {vertex_count})")]
    IndexOutOfRange {
        /// The offending index value
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

/// Errors raised while writing a mesh or model to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating or writing the output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The mesh breaks a stream invariant
    #[error("refusing to export an invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}

/// Errors raised while loading a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid config document
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised by a full generate-and-export run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Loading or checking the config failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the mesh failed
    #[error(transparent)]
    Export(#[from] ExportError),
}
