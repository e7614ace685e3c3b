//! # Quad Emitter
//!
//! Every primitive is built from unit quads. A quad is four vertices sharing
//! one tangent frame plus two triangles, appended to a [`MeshData`].

use cgmath::{InnerSpace, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::geometry::{FaceBasis, FaceSide, UvTile};

use super::mesh_data::MeshData;

/// A unit quad request.
///
/// `corner` is the top-left vertex of the quad as seen from outside; the quad
/// extends one unit along the face tangent (right) and one unit against the
/// bitangent (down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Top-left vertex
    pub corner: Point3<f32>,
    /// Direction the quad faces
    pub side: FaceSide,
    /// Texture tile sampled by the quad
    pub tile: UvTile,
}

impl Quad {
    /// Creates a quad request.
    pub fn new(corner: Point3<f32>, side: FaceSide, tile: UvTile) -> Self {
        Quad { corner, side, tile }
    }

    /// The four corners in emission order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point3<f32>; 4] {
        self.corners_with(&FaceBasis::resolve(self.side))
    }

    /// Same as [`Quad::corners`], using an already resolved basis for the side.
    pub fn corners_with(&self, basis: &FaceBasis) -> [Point3<f32>; 4] {
        let (t, b) = (basis.tangent, basis.bitangent);
        [
            self.corner,
            self.corner + t,
            self.corner + t - b,
            self.corner - b,
        ]
    }

    /// Appends this quad to `mesh`.
    pub fn push_into(&self, mesh: &mut MeshData) {
        push_quad(mesh, self.corner, self.side, self.tile);
    }
}

/// The coordinate plane a [`fill_quad`] quad lies in, named by its normal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPlane {
    /// Normal along +X
    X,
    /// Normal along +Y
    Y,
    /// Normal along +Z
    Z,
}

impl AxisPlane {
    /// The face side facing along the positive axis.
    pub fn side(self) -> FaceSide {
        match self {
            AxisPlane::X => FaceSide::RIGHT,
            AxisPlane::Y => FaceSide::TOP,
            AxisPlane::Z => FaceSide::FRONT,
        }
    }
}

/// Appends a unit quad with four vertices and two triangles to `mesh`.
///
/// All four vertices share the face's normal, tangent and bitangent. The
/// triangles are wound counter-clockwise when viewed from along the normal; if
/// the corner order ever produced the opposite winding, the index order is
/// flipped instead of the vertices so UVs stay attached to their positions.
pub fn push_quad(mesh: &mut MeshData, corner: Point3<f32>, side: FaceSide, tile: UvTile) {
    let basis = FaceBasis::resolve(side);
    let corners = Quad::new(corner, side, tile).corners_with(&basis);
    let [tl, tr, br, bl] = corners;
    let rect = tile.rect();
    let sign = basis.tangent_sign();

    // TL -> (u0,v0), TR -> (u1,v0), BR -> (u1,v1), BL -> (u0,v1)
    let mut push = |p: Point3<f32>, u: f32, v: f32| {
        mesh.push_vertex(
            p,
            basis.normal,
            basis.tangent,
            sign,
            basis.bitangent,
            [u, v],
        )
    };
    let i_tl = push(tl, rect.u0, rect.v0);
    let i_tr = push(tr, rect.u1, rect.v0);
    let i_br = push(br, rect.u1, rect.v1);
    let i_bl = push(bl, rect.u0, rect.v1);

    let base = [i_tl, i_tr, i_br, i_bl];
    for tri in quad_triangles(&corners, basis.normal) {
        mesh.push_triangle(base[tri[0]], base[tri[1]], base[tri[2]]);
    }
}

/// Triangles of a quad as indices into `corners` (TL, TR, BR, BL).
///
/// The default order is (TL, BL, BR), (TL, BR, TR). If that would wind
/// clockwise around `normal`, the last two indices of each triangle swap.
fn quad_triangles(corners: &[Point3<f32>; 4], normal: Vector3<f32>) -> [[usize; 3]; 2] {
    let [tl, _, br, bl] = *corners;
    if (bl - tl).cross(br - tl).dot(normal) >= 0.0 {
        [[0, 3, 2], [0, 2, 1]]
    } else {
        [[0, 2, 3], [0, 1, 2]]
    }
}

/// Appends a full-texture unit quad lying in `plane`, facing the positive axis.
pub fn fill_quad(mesh: &mut MeshData, corner: Point3<f32>, plane: AxisPlane) {
    push_quad(mesh, corner, plane.side(), UvTile::FULL);
}
