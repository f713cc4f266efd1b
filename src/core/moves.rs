//! Moves module - legal-move detection over board x available shapes
//!
//! Drives game-over detection: a session ends when no pooled shape fits
//! anywhere on the board.

use crate::core::board::Board;
use crate::core::shapes::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether any pooled shape fits at any board origin
///
/// Short-circuits on the first fit. An all-empty pool returns true by
/// convention: the pool never stays empty (it is refilled to 3 before
/// game-over is evaluated), so an empty pool does not end the game.
pub fn any_move_available(board: &Board, shapes: &[Option<Shape>]) -> bool {
    if shapes.iter().all(Option::is_none) {
        return true;
    }

    for shape in shapes.iter().flatten() {
        let cells = shape.cells();
        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                if board.fits(cells, row, col) {
                    return true;
                }
            }
        }
    }

    false
}
