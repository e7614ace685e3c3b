//! Tangent frames for axis-aligned faces.
//!
//! Every face is viewed from outside as if it were on screen: the tangent points
//! "right", the bitangent points "up", and the pair is chosen so that quads
//! anchored at their top-left corner get upright UVs. The frame is always
//! right-handed (`T x B == N`).

use cgmath::{InnerSpace, Vector3};

use super::face_side::FaceSide;

/// Tolerance used when checking that a frame is right-handed.
pub const HANDEDNESS_EPSILON: f32 = 1e-3;

/// Normal, tangent and bitangent of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBasis {
    /// Outward face normal (N)
    pub normal: Vector3<f32>,
    /// The +U direction (T), "right" on screen
    pub tangent: Vector3<f32>,
    /// The +V direction (B), "up" on screen
    pub bitangent: Vector3<f32>,
}

impl FaceBasis {
    /// Resolves the tangent frame for `side`.
    ///
    /// The frame comes from a lookup table and is then checked with the scalar
    /// triple product. When the table entry is left-handed the tangent is
    /// negated; the top and bottom faces are fixed up this way.
    pub fn resolve(side: FaceSide) -> Self {
        let (normal, tangent, bitangent) = match side {
            // screen-up = +Y, right = +X
            FaceSide::FRONT => (
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            // screen-up = +Y, right = -X
            FaceSide::BACK => (
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(-1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            // screen-up = +Y, right = +Z
            FaceSide::LEFT => (
                Vector3::new(-1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            // screen-up = +Y, right = -Z
            FaceSide::RIGHT => (
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            // screen-up = +Z
            FaceSide::TOP => (
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ),
            // screen-up = -Z
            FaceSide::BOTTOM => (
                Vector3::new(0.0, -1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, -1.0),
            ),
        };

        let mut basis = FaceBasis {
            normal,
            tangent,
            bitangent,
        };

        if !basis.is_right_handed() {
            basis.tangent = -basis.tangent;
        }

        basis
    }

    /// Scalar triple product `(T x B) . N`; `+1` for a right-handed unit frame.
    pub fn handedness(&self) -> f32 {
        self.tangent.cross(self.bitangent).dot(self.normal)
    }

    /// Whether `T x B` agrees with `N` within [`HANDEDNESS_EPSILON`].
    pub fn is_right_handed(&self) -> bool {
        (self.handedness() - 1.0).abs() < HANDEDNESS_EPSILON
    }

    /// Tangent handedness sign stored in the `w` component of tangent streams.
    pub fn tangent_sign(&self) -> f32 {
        if self.handedness() < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn every_side_resolves_to_a_right_handed_unit_frame() {
        for side in FaceSide::all() {
            let basis = FaceBasis::resolve(side);
            assert!((basis.normal.magnitude() - 1.0).abs() < EPSILON);
            assert!((basis.tangent.magnitude() - 1.0).abs() < EPSILON);
            assert!((basis.bitangent.magnitude() - 1.0).abs() < EPSILON);
            assert!(
                (basis.handedness() - 1.0).abs() < HANDEDNESS_EPSILON,
                "{side} is not right-handed"
            );
            assert_eq!(basis.tangent_sign(), 1.0);
        }
    }

    #[test]
    fn normal_matches_face_side() {
        for side in FaceSide::all() {
            assert_eq!(FaceBasis::resolve(side).normal, side.normal());
        }
    }

    #[test]
    fn opposite_normals_are_exact_negations() {
        for (a, b) in [
            (FaceSide::FRONT, FaceSide::BACK),
            (FaceSide::RIGHT, FaceSide::LEFT),
            (FaceSide::TOP, FaceSide::BOTTOM),
        ] {
            assert_eq!(FaceBasis::resolve(a).normal, -FaceBasis::resolve(b).normal);
        }
    }

    #[test]
    fn top_and_bottom_tangents_are_flipped() {
        assert_eq!(
            FaceBasis::resolve(FaceSide::TOP).tangent,
            Vector3::new(-1.0, 0.0, 0.0)
        );
        assert_eq!(
            FaceBasis::resolve(FaceSide::BOTTOM).tangent,
            Vector3::new(-1.0, 0.0, 0.0)
        );
        // the side faces are right-handed straight out of the table
        assert_eq!(
            FaceBasis::resolve(FaceSide::FRONT).tangent,
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn tangent_and_bitangent_lie_in_the_face_plane() {
        for side in FaceSide::all() {
            let basis = FaceBasis::resolve(side);
            assert!(basis.tangent.dot(basis.normal).abs() < EPSILON);
            assert!(basis.bitangent.dot(basis.normal).abs() < EPSILON);
            assert!(basis.tangent.dot(basis.bitangent).abs() < EPSILON);
        }
    }
}
