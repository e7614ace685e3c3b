//! # UV Tile Module
//!
//! Maps a tile of an N x N texture grid to the UV rectangle a quad samples.

use log::debug;
use serde::{Deserialize, Serialize};

/// A tile in an N x N grid laid over unit UV space.
///
/// `segment` is the number of tiles per row and column, `index` the
/// zero-based tile in row-major order. A `segment` of one or less selects the
/// whole texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UvTile {
    /// Tiles per row and per column
    pub segment: i32,
    /// Row-major tile index, counted from the top-left tile
    pub index: i32,
}

/// The UV rectangle `[u0, v0] x [u1, v1]` covered by a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    /// Left edge
    pub u0: f32,
    /// Top edge
    pub v0: f32,
    /// Right edge
    pub u1: f32,
    /// Bottom edge
    pub v1: f32,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: UvRect = UvRect {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };
}

impl Default for UvTile {
    fn default() -> Self {
        Self::FULL
    }
}

impl UvTile {
    /// Samples the full `[0, 1] x [0, 1]` range.
    pub const FULL: UvTile = UvTile {
        segment: 1,
        index: 0,
    };

    /// Creates a tile selector.
    pub fn new(segment: i32, index: i32) -> Self {
        UvTile { segment, index }
    }

    /// Number of tiles in the grid.
    pub fn tile_count(&self) -> i64 {
        if self.segment <= 1 {
            1
        } else {
            i64::from(self.segment) * i64::from(self.segment)
        }
    }

    /// Computes the UV rectangle of this tile.
    ///
    /// An out-of-range `index` is clamped to the nearest valid tile rather
    /// than rejected.
    pub fn rect(&self) -> UvRect {
        if self.segment <= 1 {
            return UvRect::FULL;
        }

        let seg = i64::from(self.segment);
        let index = i64::from(self.index).clamp(0, self.tile_count() - 1);
        if index != i64::from(self.index) {
            debug!(
                "uv tile index {} clamped to {} for a {}x{} grid",
                self.index, index, seg, seg
            );
        }

        let row = index / seg;
        let col = index % seg;

        let step = 1.0 / seg as f32;
        let u0 = col as f32 * step;
        let v0 = row as f32 * step;
        UvRect {
            u0,
            v0,
            u1: u0 + step,
            v1: v0 + step,
        }
    }
}
