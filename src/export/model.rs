//! # Model Description
//!
//! An engine-neutral model: one level of detail holding one mesh, whose
//! vertex attributes are stored as typed, tightly packed buffers. A renderer
//! uploads each buffer as-is and binds it with the recorded format.
//!
//! Streams that a mesh does not carry are left out; only the position stream
//! and the index buffer are mandatory.

use bytemuck::Pod;
use log::info;
use serde::Serialize;

use crate::{
    error::ExportError,
    meshing::{
        mesh_data::{BITANGENT_STRIDE, NORMAL_STRIDE, POSITION_STRIDE, TANGENT_STRIDE, UV_STRIDE},
        Aabb, MeshData,
    },
};

/// Name of the single material slot every model is created with.
pub const DEFAULT_MATERIAL_SLOT_NAME: &str = "Default";

/// Element format of a typed buffer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BufferFormat {
    /// One `u32`
    R32Uint,
    /// Two `f32`
    R32G32Float,
    /// Three `f32`
    R32G32B32Float,
    /// Four `f32`
    R32G32B32A32Float,
}

impl BufferFormat {
    /// Size in bytes of one element of this format.
    pub fn element_size(self) -> u32 {
        match self {
            BufferFormat::R32Uint => 4,
            BufferFormat::R32G32Float => 8,
            BufferFormat::R32G32B32Float => 12,
            BufferFormat::R32G32B32A32Float => 16,
        }
    }
}

/// Shader input a vertex stream binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreamSemantic {
    /// `POSITION`
    Position,
    /// `NORMAL`
    Normal,
    /// `TANGENT`
    Tangent,
    /// `BITANGENT`
    Bitangent,
    /// `UV`
    Uv,
}

impl StreamSemantic {
    /// The semantic name used by shaders.
    pub fn name(self) -> &'static str {
        match self {
            StreamSemantic::Position => "POSITION",
            StreamSemantic::Normal => "NORMAL",
            StreamSemantic::Tangent => "TANGENT",
            StreamSemantic::Bitangent => "BITANGENT",
            StreamSemantic::Uv => "UV",
        }
    }
}

/// A tightly packed copy of one stream with a typed view over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BufferAsset {
    /// Layout of one element
    pub format: BufferFormat,
    /// Number of elements
    pub element_count: u32,
    /// Bytes per element
    pub element_size: u32,
    /// Packed element bytes in native byte order
    pub data: Vec<u8>,
}

impl BufferAsset {
    fn from_slice<T: Pod>(values: &[T], format: BufferFormat, stride: usize) -> Self {
        BufferAsset {
            format,
            element_count: (values.len() / stride) as u32,
            element_size: format.element_size(),
            data: bytemuck::cast_slice(values).to_vec(),
        }
    }

    /// Total size of the buffer in bytes.
    pub fn byte_count(&self) -> usize {
        self.data.len()
    }
}

/// A vertex stream bound to a shader semantic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshStream {
    /// Shader input the stream feeds
    pub semantic: StreamSemantic,
    /// The stream data
    pub buffer: BufferAsset,
}

/// One drawable mesh inside a level of detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LodMesh {
    /// Bounds of the positions; `None` for an empty mesh
    pub aabb: Option<Aabb>,
    /// Index into [`ModelAsset::material_slots`]
    pub material_slot: u32,
    /// Triangle indices as `R32Uint`
    pub index_buffer: BufferAsset,
    /// Vertex streams, position first
    pub streams: Vec<MeshStream>,
}

impl LodMesh {
    /// Finds the stream bound to `semantic`.
    pub fn stream(&self, semantic: StreamSemantic) -> Option<&MeshStream> {
        self.streams.iter().find(|s| s.semantic == semantic)
    }
}

/// One level of detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelLod {
    /// Meshes drawn at this level
    pub meshes: Vec<LodMesh>,
}

/// A material a mesh can be drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialSlot {
    /// Identifier that survives reordering of the slots
    pub stable_id: u32,
    /// Display name
    pub name: String,
}

/// A renderable model: named, with material slots and levels of detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelAsset {
    /// Model name
    pub name: String,
    /// Materials the meshes refer to by index
    pub material_slots: Vec<MaterialSlot>,
    /// Levels of detail, most detailed first
    pub lods: Vec<ModelLod>,
}

impl ModelAsset {
    /// Builds a single-LOD, single-mesh model from `mesh`.
    ///
    /// # Arguments
    /// * `name` - Model name
    /// * `mesh` - Source geometry; it is validated first
    ///
    /// # Returns
    /// The model, or [`ExportError::InvalidMesh`] if the mesh breaks a stream invariant.
    pub fn from_mesh(name: &str, mesh: &MeshData) -> Result<Self, ExportError> {
        mesh.validate()?;

        let mut streams = vec![MeshStream {
            semantic: StreamSemantic::Position,
            buffer: BufferAsset::from_slice(
                mesh.positions(),
                BufferFormat::R32G32B32Float,
                POSITION_STRIDE,
            ),
        }];

        let optional = [
            (
                StreamSemantic::Normal,
                mesh.normals(),
                BufferFormat::R32G32B32Float,
                NORMAL_STRIDE,
            ),
            (
                StreamSemantic::Tangent,
                mesh.tangents(),
                BufferFormat::R32G32B32A32Float,
                TANGENT_STRIDE,
            ),
            (
                StreamSemantic::Bitangent,
                mesh.bitangents(),
                BufferFormat::R32G32B32Float,
                BITANGENT_STRIDE,
            ),
            (
                StreamSemantic::Uv,
                mesh.uvs(),
                BufferFormat::R32G32Float,
                UV_STRIDE,
            ),
        ];
        for (semantic, values, format, stride) in optional {
            if values.is_empty() {
                continue;
            }
            streams.push(MeshStream {
                semantic,
                buffer: BufferAsset::from_slice(values, format, stride),
            });
        }

        let lod_mesh = LodMesh {
            aabb: mesh.aabb(),
            material_slot: 0,
            index_buffer: BufferAsset::from_slice(mesh.indices(), BufferFormat::R32Uint, 1),
            streams,
        };

        info!(
            "created model '{}': {} vertices, {} indices, {} streams",
            name,
            mesh.vertex_count(),
            mesh.index_count(),
            lod_mesh.streams.len()
        );

        Ok(ModelAsset {
            name: name.to_string(),
            material_slots: vec![MaterialSlot {
                stable_id: 0,
                name: DEFAULT_MATERIAL_SLOT_NAME.to_string(),
            }],
            lods: vec![ModelLod {
                meshes: vec![lod_mesh],
            }],
        })
    }

    /// The first mesh of the first LOD.
    pub fn primary_mesh(&self) -> Option<&LodMesh> {
        self.lods.first().and_then(|lod| lod.meshes.first())
    }
}
