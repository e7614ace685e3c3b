//! Triangle mesh storage as parallel, GPU-friendly streams.
//!
//! [`MeshData`] keeps one flat `f32` stream per vertex attribute and one `u32`
//! index stream. The streams are private so that every append advances all of
//! them together, and deserialized meshes are validated before they exist.

use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{error::MeshError, export::vertex::Vertex};

/// Floats per position.
pub const POSITION_STRIDE: usize = 3;
/// Floats per normal.
pub const NORMAL_STRIDE: usize = 3;
/// Floats per tangent; `w` is the handedness sign.
pub const TANGENT_STRIDE: usize = 4;
/// Floats per bitangent.
pub const BITANGENT_STRIDE: usize = 3;
/// Floats per texture coordinate.
pub const UV_STRIDE: usize = 2;

/// An append-only triangle mesh.
///
/// # Invariants
/// - All five vertex streams describe the same number of vertices.
/// - The index count is a multiple of three.
/// - Indices only refer to vertices that were appended before them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeshData")]
pub struct MeshData {
    indices: Vec<u32>,
    /// x, y, z
    positions: Vec<f32>,
    /// nx, ny, nz
    normals: Vec<f32>,
    /// tx, ty, tz, tw
    tangents: Vec<f32>,
    /// bx, by, bz
    bitangents: Vec<f32>,
    /// u, v
    uvs: Vec<f32>,
}

/// Serialized form of [`MeshData`], checked before conversion.
#[derive(Deserialize)]
struct RawMeshData {
    indices: Vec<u32>,
    positions: Vec<f32>,
    normals: Vec<f32>,
    tangents: Vec<f32>,
    bitangents: Vec<f32>,
    uvs: Vec<f32>,
}

impl TryFrom<RawMeshData> for MeshData {
    type Error = MeshError;

    fn try_from(raw: RawMeshData) -> Result<Self, Self::Error> {
        let mesh = MeshData {
            indices: raw.indices,
            positions: raw.positions,
            normals: raw.normals,
            tangents: raw.tangents,
            bitangents: raw.bitangents,
            uvs: raw.uvs,
        };
        mesh.validate()?;
        Ok(mesh)
    }
}

/// Axis-aligned bounding box of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Smallest x, y and z
    pub min: [f32; 3],
    /// Largest x, y and z
    pub max: [f32; 3],
}

impl Aabb {
    /// Size of the box along each axis.
    pub fn extents(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Grows the box to contain `point`.
    pub fn add_point(&mut self, point: [f32; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `vertices` vertices and `indices` indices.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        MeshData {
            indices: Vec::with_capacity(indices),
            positions: Vec::with_capacity(vertices * POSITION_STRIDE),
            normals: Vec::with_capacity(vertices * NORMAL_STRIDE),
            tangents: Vec::with_capacity(vertices * TANGENT_STRIDE),
            bitangents: Vec::with_capacity(vertices * BITANGENT_STRIDE),
            uvs: Vec::with_capacity(vertices * UV_STRIDE),
        }
    }

    /// Empties every stream.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.positions.clear();
        self.normals.clear();
        self.tangents.clear();
        self.bitangents.clear();
        self.uvs.clear();
    }

    /// Appends one vertex to all streams and returns its index.
    ///
    /// # Arguments
    /// * `position` - Vertex position
    /// * `normal` - Face normal
    /// * `tangent` - +U direction; `tangent_sign` is stored as its `w`
    /// * `bitangent` - +V direction
    /// * `uv` - Texture coordinate
    #[allow(clippy::too_many_arguments)]
    pub fn push_vertex(
        &mut self,
        position: Point3<f32>,
        normal: Vector3<f32>,
        tangent: Vector3<f32>,
        tangent_sign: f32,
        bitangent: Vector3<f32>,
        uv: [f32; 2],
    ) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions
            .extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        self.tangents
            .extend_from_slice(&[tangent.x, tangent.y, tangent.z, tangent_sign]);
        self.bitangents
            .extend_from_slice(&[bitangent.x, bitangent.y, bitangent.z]);
        self.uvs.extend_from_slice(&uv);
        index
    }

    /// Appends one triangle.
    ///
    /// # Panics
    /// Panics if any index refers to a vertex that has not been appended yet.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        let vertex_count = self.vertex_count();
        assert!(
            [a, b, c].iter().all(|&i| (i as usize) < vertex_count),
            "triangle ({a}, {b}, {c}) references a vertex past {vertex_count}"
        );
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Appends all of `other`, re-basing its indices past the existing vertices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.tangents.extend_from_slice(&other.tangents);
        self.bitangents.extend_from_slice(&other.bitangents);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_STRIDE
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the tangent stream is populated.
    pub fn has_tangents(&self) -> bool {
        !self.tangents.is_empty()
    }

    /// Whether the bitangent stream is populated.
    pub fn has_bitangents(&self) -> bool {
        !self.bitangents.is_empty()
    }

    /// Whether the uv stream is populated.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Triangle indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Positions as flat `x, y, z` triples.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Normals as flat `x, y, z` triples.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Tangents as flat `x, y, z, w` quadruples.
    pub fn tangents(&self) -> &[f32] {
        &self.tangents
    }

    /// Bitangents as flat `x, y, z` triples.
    pub fn bitangents(&self) -> &[f32] {
        &self.bitangents
    }

    /// Texture coordinates as flat `u, v` pairs.
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Position of vertex `index`.
    pub fn position(&self, index: usize) -> Point3<f32> {
        let p = &self.positions[index * POSITION_STRIDE..(index + 1) * POSITION_STRIDE];
        Point3::new(p[0], p[1], p[2])
    }

    /// Normal of vertex `index`.
    pub fn normal(&self, index: usize) -> Vector3<f32> {
        let n = &self.normals[index * NORMAL_STRIDE..(index + 1) * NORMAL_STRIDE];
        Vector3::new(n[0], n[1], n[2])
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Bounding box of all positions, or `None` for an empty mesh.
    pub fn aabb(&self) -> Option<Aabb> {
        let mut points = self.positions.chunks_exact(POSITION_STRIDE);
        let first = points.next()?;
        let first = [first[0], first[1], first[2]];
        let mut aabb = Aabb {
            min: first,
            max: first,
        };
        for p in points {
            aabb.add_point([p[0], p[1], p[2]]);
        }
        Some(aabb)
    }

    /// Packs the streams into one interleaved vertex per entry.
    pub fn interleaved(&self) -> Vec<Vertex> {
        (0..self.vertex_count())
            .map(|i| Vertex {
                position: slice_to_array(&self.positions, i, POSITION_STRIDE),
                normal: slice_to_array(&self.normals, i, NORMAL_STRIDE),
                tangent: slice_to_array(&self.tangents, i, TANGENT_STRIDE),
                bitangent: slice_to_array(&self.bitangents, i, BITANGENT_STRIDE),
                uv: slice_to_array(&self.uvs, i, UV_STRIDE),
            })
            .collect()
    }

    /// Checks every stream and index invariant.
    ///
    /// Meshes built through this crate always pass; this is for data that
    /// arrived from elsewhere, such as deserialized JSON.
    pub fn validate(&self) -> Result<(), MeshError> {
        for (stream, len, stride) in [
            ("positions", self.positions.len(), POSITION_STRIDE),
            ("normals", self.normals.len(), NORMAL_STRIDE),
            ("tangents", self.tangents.len(), TANGENT_STRIDE),
            ("bitangents", self.bitangents.len(), BITANGENT_STRIDE),
            ("uvs", self.uvs.len(), UV_STRIDE),
        ] {
            if len % stride != 0 {
                return Err(MeshError::PartialVertex {
                    stream,
                    len,
                    stride,
                });
            }
        }

        let positions = self.positions.len() / POSITION_STRIDE;
        let normals = self.normals.len() / NORMAL_STRIDE;
        let tangents = self.tangents.len() / TANGENT_STRIDE;
        let bitangents = self.bitangents.len() / BITANGENT_STRIDE;
        let uvs = self.uvs.len() / UV_STRIDE;
        if [normals, tangents, bitangents, uvs]
            .iter()
            .any(|&count| count != positions)
        {
            return Err(MeshError::StreamLengthMismatch {
                positions,
                normals,
                tangents,
                bitangents,
                uvs,
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotTriangles(self.indices.len()));
        }

        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= positions) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: positions,
            });
        }

        Ok(())
    }

    /// Parses a mesh from JSON. Meshes that fail [`MeshData::validate`] are
    /// rejected as parse errors.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn slice_to_array<const N: usize>(stream: &[f32], index: usize, stride: usize) -> [f32; N] {
    let mut out = [0.0; N];
    out.copy_from_slice(&stream[index * stride..index * stride + N]);
    out
}
