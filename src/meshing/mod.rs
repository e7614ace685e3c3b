//! Mesh generation for procedural primitives.
//!
//! This module turns face requests into GPU-friendly triangle data. Every quad
//! becomes four vertices and two triangles; primitives are built from quads.
//!
//! # Architecture
//! - [`MeshData`]: parallel vertex streams plus an index stream
//! - [`Quad`] / [`push_quad`]: emits one unit face into a mesh
//! - [`build_cube`] / [`build_plane`]: complete primitives
//!
//! # Usage
//! ```
//! use procedural_mesh::meshing::{build_cube, build_plane};
//!
//! let cube = build_cube();
//! assert_eq!(cube.vertex_count(), 24);
//! assert_eq!(cube.index_count(), 36);
//!
//! let plane = build_plane();
//! assert_eq!(plane.triangle_count(), 2);
//! ```

pub mod mesh_data;
pub mod primitives;
pub mod quad;

pub use mesh_data::{Aabb, MeshData};
pub use primitives::{
    build_cube, build_cube_with_tiles, build_plane, build_plane_at, build_plane_with, FaceTiles,
};
pub use quad::{fill_quad, push_quad, AxisPlane, Quad};
