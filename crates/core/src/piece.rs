//! Active piece representation
//!
//! A piece is a kind, its current (possibly rotated) block offsets and an
//! origin. Absolute cells are `origin + offset` for every offset.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::geometry;
use crate::types::{Axis, Color, PieceKind, Vec3, FIELD_DEPTH, FIELD_HEIGHT, FIELD_WIDTH, MAX_PIECE_BLOCKS};

/// Block offsets of a piece, at most four
pub type Shape = ArrayVec<Vec3, MAX_PIECE_BLOCKS>;

/// Where new active pieces appear: center of the x/z footprint, near the top
pub const SPAWN_ORIGIN: Vec3 = Vec3::new(
    FIELD_WIDTH as i32 / 2,
    FIELD_HEIGHT as i32 - 2,
    FIELD_DEPTH as i32 / 2,
);

/// A piece: the active one, an upcoming one or the held one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub origin: Vec3,
    pub color: Color,
}

impl Piece {
    /// Catalog shape at the spawn origin
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_ORIGIN)
    }

    /// Catalog shape at the given origin
    pub fn at(kind: PieceKind, origin: Vec3) -> Self {
        Self {
            kind,
            shape: catalog::shape(kind).iter().copied().collect(),
            origin,
            color: catalog::color(kind),
        }
    }

    /// Absolute cells the piece covers
    pub fn cells(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.shape.iter().map(move |&offset| self.origin + offset)
    }

    /// Copy moved by (dx, dy, dz)
    pub fn translated(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            origin: self.origin + Vec3::new(dx, dy, dz),
            ..self.clone()
        }
    }

    /// Copy moved by `delta`, `None` if a coordinate would overflow
    pub fn checked_translated(&self, delta: Vec3) -> Option<Self> {
        Some(Self {
            origin: self.origin.checked_add(delta)?,
            ..self.clone()
        })
    }

    /// Copy with the origin replaced
    pub fn moved_to(&self, origin: Vec3) -> Self {
        Self {
            origin,
            ..self.clone()
        }
    }

    /// Copy rotated 90° about `axis`, origin unchanged
    pub fn rotated(&self, axis: Axis) -> Self {
        Self {
            shape: geometry::rotate_shape(&self.shape, axis),
            ..self.clone()
        }
    }
}
