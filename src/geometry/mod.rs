//! # Face Geometry
//!
//! Orientation, tangent frame and texture tile of a single axis-aligned face.
//! Nothing in here touches a mesh; [`crate::meshing`] builds on these types.
//!
//! * [`FaceSide`]: which of the six axis directions a face points along
//! * [`FaceBasis`]: the right-handed normal/tangent/bitangent frame of a side
//! * [`UvTile`]: which tile of an N x N texture grid a face samples

pub mod face_basis;
pub mod face_side;
pub mod uv_tile;

pub use face_basis::FaceBasis;
pub use face_side::FaceSide;
pub use uv_tile::{UvRect, UvTile};
