//! Moving piece - the falling shape, its rotation index and anchor

use std::ops::RangeInclusive;

use crate::shapes::{get_mask, Mask};
use crate::types::{Rotation, ShapeId, SPAWN_X, SPAWN_Y};

/// Active falling piece
///
/// Occupied local cells map to the board by translation:
/// `board_x = x + local_x`, `board_y = y + local_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: ShapeId,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor in its first rotation
    pub fn spawn(shape: ShapeId) -> Self {
        Self {
            shape,
            rotation: Rotation::FIRST,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn mask(&self) -> &'static Mask {
        get_mask(self.shape, self.rotation)
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + Clone {
        let (ax, ay) = (self.x, self.y);
        self.mask()
            .cells()
            .map(move |(lx, ly)| (ax + lx as i16, ay + ly as i16))
    }

    /// Board rows covered by the piece's bounding box
    pub fn rows_spanned(&self) -> RangeInclusive<i16> {
        self.y + 1..=self.y + self.mask().height() as i16
    }

    /// Same piece translated by `(dx, dy)`
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor, next rotation index
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.next(),
            ..*self
        }
    }
}
