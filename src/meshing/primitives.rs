//! # Primitive Assemblers
//!
//! Pure functions that compose quads into complete meshes. Each call builds a
//! fresh [`MeshData`] and hands it back by value.
//!
//! The cube is centered on the origin and spans `[-0.5, 0.5]` on every axis.
//! Faces do not share vertices, which keeps normals and tangents flat per face.

use cgmath::{EuclideanSpace, Point3};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{FaceBasis, FaceSide, UvTile};

use super::{
    mesh_data::MeshData,
    quad::{push_quad, Quad},
};

/// Vertices emitted per quad.
pub const VERTICES_PER_FACE: usize = 4;
/// Indices emitted per quad.
pub const INDICES_PER_FACE: usize = 6;

/// Default plane corner: a 1x1 plane on XZ at `y = 0`, centered on the origin.
pub const DEFAULT_PLANE_CORNER: [f32; 3] = [0.5, 0.0, 0.5];

/// Texture tile for each face of a cube, indexed by [`FaceSide`].
///
/// The order is: [FRONT, BACK, LEFT, RIGHT, TOP, BOTTOM]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceTiles(pub [UvTile; 6]);

impl FaceTiles {
    /// Every face samples the whole texture.
    pub fn full() -> Self {
        FaceTiles([UvTile::FULL; 6])
    }

    /// Every face samples the same tile.
    pub fn uniform(tile: UvTile) -> Self {
        FaceTiles([tile; 6])
    }

    /// Tile of `side`'s face.
    pub fn get(&self, side: FaceSide) -> UvTile {
        self.0[side.index()]
    }
}

impl Default for FaceTiles {
    fn default() -> Self {
        Self::full()
    }
}

/// Top-left corner of `side`'s face on the centered unit cube.
///
/// The face center sits half a unit along the normal; the top-left corner is
/// half a unit against the tangent and half a unit along the bitangent.
pub fn cube_face_corner(side: FaceSide) -> Point3<f32> {
    let basis = FaceBasis::resolve(side);
    Point3::from_vec((basis.normal - basis.tangent + basis.bitangent) * 0.5)
}

/// Builds a unit cube with the whole texture on every face.
///
/// # Returns
/// A mesh with 24 vertices and 36 indices.
pub fn build_cube() -> MeshData {
    build_cube_with_tiles(&FaceTiles::full())
}

/// Builds a unit cube where each face samples its own texture tile.
pub fn build_cube_with_tiles(tiles: &FaceTiles) -> MeshData {
    let sides = FaceSide::all();
    let mut mesh = MeshData::with_capacity(
        sides.len() * VERTICES_PER_FACE,
        sides.len() * INDICES_PER_FACE,
    );

    for side in sides {
        push_quad(&mut mesh, cube_face_corner(side), side, tiles.get(side));
    }

    debug!(
        "built cube: {} vertices, {} indices",
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh
}

/// Builds the default plane: 1x1 on XZ, facing +Y, centered on the origin.
pub fn build_plane() -> MeshData {
    build_plane_at(Point3::from(DEFAULT_PLANE_CORNER))
}

/// Builds an upward-facing plane whose top-left corner is `corner`.
pub fn build_plane_at(corner: Point3<f32>) -> MeshData {
    build_plane_with(Quad::new(corner, FaceSide::TOP, UvTile::FULL))
}

/// Builds a single-quad plane from an explicit quad request.
pub fn build_plane_with(quad: Quad) -> MeshData {
    let mut mesh = MeshData::with_capacity(VERTICES_PER_FACE, INDICES_PER_FACE);
    quad.push_into(&mut mesh);

    debug!(
        "built {} plane at ({}, {}, {}): {} vertices, {} indices",
        quad.side,
        quad.corner.x,
        quad.corner.y,
        quad.corner.z,
        mesh.vertex_count(),
        mesh.index_count()
    );
    mesh
}
