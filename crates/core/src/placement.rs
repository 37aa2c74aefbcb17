//! Placement validation - the single authority on whether a piece may occupy a spot

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::shapes::get_mask;
use crate::types::{Rotation, ShapeId};

/// Check a candidate placement against the board.
///
/// Every occupied cell of `shape` at `rotation`, translated by the anchor, must be
/// empty. The rim and everything outside the playfield read as border, so no
/// separate bounds check is needed.
pub fn is_valid_placement(
    board: &Board,
    shape: ShapeId,
    rotation: Rotation,
    anchor_x: i16,
    anchor_y: i16,
) -> bool {
    get_mask(shape, rotation)
        .cells()
        .all(|(lx, ly)| board.is_empty(anchor_x + lx as i16, anchor_y + ly as i16))
}

/// [`is_valid_placement`] for an existing piece value
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    is_valid_placement(board, piece.shape, piece.rotation, piece.x, piece.y)
}
