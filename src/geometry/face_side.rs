//! # Face Side Module
//!
//! This module defines the six axis-aligned orientations a generated quad can face.

use std::{fmt, str::FromStr};

use cgmath::Vector3;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// One of the six axis-aligned directions a quad can face.
///
/// Each variant carries a fixed integer value so that sides can be stored,
/// passed across tool boundaries and indexed into per-face tables.
///
/// The order is: [FRONT, BACK, LEFT, RIGHT, TOP, BOTTOM]
#[derive(
    PartialEq, Eq, Hash, Copy, Clone, Debug, FromPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FaceSide {
    /// Facing positive Z
    FRONT = 0,

    /// Facing negative Z
    BACK = 1,

    /// Facing negative X
    LEFT = 2,

    /// Facing positive X
    RIGHT = 3,

    /// Facing positive Y
    TOP = 4,

    /// Facing negative Y
    BOTTOM = 5,
}

impl FaceSide {
    /// Returns all six sides in index order.
    pub fn all() -> [FaceSide; 6] {
        [
            FaceSide::FRONT,
            FaceSide::BACK,
            FaceSide::LEFT,
            FaceSide::RIGHT,
            FaceSide::TOP,
            FaceSide::BOTTOM,
        ]
    }

    /// Converts a raw orientation index into a side.
    ///
    /// An index outside `0..=5` is a caller bug, not a runtime condition.
    /// Use [`FaceSide::try_from_index`] for values that come from user input.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..=5`.
    pub fn from_index(index: i32) -> Self {
        match Self::try_from_index(index) {
            Ok(side) => side,
            Err(_) => panic!("face orientation {index} out of range [0..5]"),
        }
    }

    /// Converts a raw orientation index into a side, rejecting invalid values.
    pub fn try_from_index(index: i32) -> Result<Self, MeshError> {
        num::FromPrimitive::from_i32(index).ok_or(MeshError::UnknownFaceSide(index))
    }

    /// The integer value of this side.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The outward unit normal of this side.
    pub fn normal(self) -> Vector3<f32> {
        match self {
            FaceSide::FRONT => Vector3::new(0.0, 0.0, 1.0),
            FaceSide::BACK => Vector3::new(0.0, 0.0, -1.0),
            FaceSide::LEFT => Vector3::new(-1.0, 0.0, 0.0),
            FaceSide::RIGHT => Vector3::new(1.0, 0.0, 0.0),
            FaceSide::TOP => Vector3::new(0.0, 1.0, 0.0),
            FaceSide::BOTTOM => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    /// The side facing the other way along the same axis.
    pub fn opposite(self) -> Self {
        match self {
            FaceSide::FRONT => FaceSide::BACK,
            FaceSide::BACK => FaceSide::FRONT,
            FaceSide::LEFT => FaceSide::RIGHT,
            FaceSide::RIGHT => FaceSide::LEFT,
            FaceSide::TOP => FaceSide::BOTTOM,
            FaceSide::BOTTOM => FaceSide::TOP,
        }
    }

    /// Lower-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            FaceSide::FRONT => "front",
            FaceSide::BACK => "back",
            FaceSide::LEFT => "left",
            FaceSide::RIGHT => "right",
            FaceSide::TOP => "top",
            FaceSide::BOTTOM => "bottom",
        }
    }
}

impl TryFrom<i32> for FaceSide {
    type Error = MeshError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from_index(value)
    }
}

impl FromStr for FaceSide {
    type Err = MeshError;

    /// Accepts side names (`"top"`, `"Front"`, ...), axis names (`"+y"`, `"-z"`, ...)
    /// and raw indices (`"4"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let side = match lowered.as_str() {
            "front" | "+z" => FaceSide::FRONT,
            "back" | "-z" => FaceSide::BACK,
            "left" | "-x" => FaceSide::LEFT,
            "right" | "+x" => FaceSide::RIGHT,
            "top" | "+y" => FaceSide::TOP,
            "bottom" | "-y" => FaceSide::BOTTOM,
            other => match other.parse::<i32>() {
                Ok(index) => return Self::try_from_index(index),
                Err(_) => return Err(MeshError::UnknownFaceSideName(s.to_string())),
            },
        };
        Ok(side)
    }
}

impl fmt::Display for FaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, side) in FaceSide::all().into_iter().enumerate() {
            assert_eq!(side.index(), i);
            assert_eq!(FaceSide::from_index(i as i32), side);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(matches!(
            FaceSide::try_from_index(6),
            Err(MeshError::UnknownFaceSide(6))
        ));
        assert!(FaceSide::try_from(-1).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_index_panics_on_invalid_orientation() {
        FaceSide::from_index(7);
    }

    #[test]
    fn opposite_sides_have_negated_normals() {
        for side in FaceSide::all() {
            assert_eq!(side.opposite().normal(), -side.normal());
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn parses_names_axes_and_indices() {
        assert_eq!("Top".parse::<FaceSide>().unwrap(), FaceSide::TOP);
        assert_eq!("-x".parse::<FaceSide>().unwrap(), FaceSide::LEFT);
        assert_eq!("1".parse::<FaceSide>().unwrap(), FaceSide::BACK);
        assert!("sideways".parse::<FaceSide>().is_err());
        assert!("9".parse::<FaceSide>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&FaceSide::BOTTOM).unwrap();
        assert_eq!(json, "\"bottom\"");
        let side: FaceSide = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(side, FaceSide::RIGHT);
    }
}
