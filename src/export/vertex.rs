//! Interleaved vertex layout for renderers that want a single vertex buffer.
//!
//! [`MeshData`](crate::meshing::MeshData) stores one stream per attribute. Some
//! consumers prefer one struct per vertex instead; this module defines that
//! struct and describes where each attribute sits inside it.

use serde::Serialize;

use super::model::{BufferFormat, StreamSemantic};

/// A vertex with every attribute packed together.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Tangent: [f32; 4] (16 bytes), `w` is the handedness sign
/// - Bitangent: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 60 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Unit face normal
    pub normal: [f32; 3],
    /// Tangent direction with the handedness sign in `w`
    pub tangent: [f32; 4],
    /// Bitangent direction
    pub bitangent: [f32; 3],
    /// Texture coordinates, origin at the top-left
    pub uv: [f32; 2],
}

/// Where one attribute lives inside [`Vertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexAttribute {
    /// Shader input the attribute feeds
    pub semantic: StreamSemantic,
    /// Element layout
    pub format: BufferFormat,
    /// Byte offset from the start of the vertex
    pub offset: u32,
}

impl Vertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;

    /// Describes the attributes of the interleaved layout in declaration order.
    pub fn attributes() -> [VertexAttribute; 5] {
        [
            VertexAttribute {
                semantic: StreamSemantic::Position,
                format: BufferFormat::R32G32B32Float,
                offset: 0,
            },
            VertexAttribute {
                semantic: StreamSemantic::Normal,
                format: BufferFormat::R32G32B32Float,
                offset: std::mem::size_of::<[f32; 3]>() as u32,
            },
            VertexAttribute {
                semantic: StreamSemantic::Tangent,
                format: BufferFormat::R32G32B32A32Float,
                offset: std::mem::size_of::<[f32; 6]>() as u32,
            },
            VertexAttribute {
                semantic: StreamSemantic::Bitangent,
                format: BufferFormat::R32G32B32Float,
                offset: std::mem::size_of::<[f32; 10]>() as u32,
            },
            VertexAttribute {
                semantic: StreamSemantic::Uv,
                format: BufferFormat::R32G32Float,
                offset: std::mem::size_of::<[f32; 13]>() as u32,
            },
        ]
    }

    /// Raw bytes of a vertex slice, ready for upload.
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::build_cube;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 60);

        let attributes = Vertex::attributes();
        let mut expected_offset = 0;
        for attribute in attributes {
            assert_eq!(attribute.offset, expected_offset);
            expected_offset += attribute.format.element_size();
        }
        assert_eq!(expected_offset, Vertex::STRIDE);
    }

    #[test]
    fn cube_bytes_match_vertex_count() {
        let vertices = build_cube().interleaved();
        assert_eq!(vertices.len(), 24);
        assert_eq!(Vertex::as_bytes(&vertices).len(), 24 * 60);
    }
}
