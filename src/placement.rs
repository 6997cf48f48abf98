//! Placement validation and application.
//!
//! Validation and mutation are deliberately split: `is_valid` is a pure
//! predicate over the current board, and `place_on_board` applies a piece
//! without re-checking. Callers must only place after a positive validation
//! against the same board state.

use crate::board::{Board, Cell};
use crate::config::PIECE_CELLS;
use crate::shapes;

/// A piece that passed validation, pinned to its anchor cell. Retained for
/// bookkeeping; the board cells stay the authoritative placement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub kind: u8,
    pub rotation: u8,
    pub col: i32,
    pub row: i32,
}

impl PlacedPiece {
    /// Absolute board cells covered by this piece. Computed in `i64` so an
    /// anchor near the `i32` limits cannot overflow; such cells simply fail
    /// the bounds check in [`is_valid`].
    pub fn cells(&self) -> [(i64, i64); PIECE_CELLS] {
        let offs = shapes::offsets(self.kind, self.rotation);
        core::array::from_fn(|i| {
            let (dx, dy) = offs[i];
            (self.col as i64 + dx as i64, self.row as i64 + dy as i64)
        })
    }
}

/// Whether every cell of the piece lies inside the board and is empty.
/// No side effects.
pub fn is_valid(board: &Board, piece: &PlacedPiece) -> bool {
    piece.cells().iter().all(|&(col, row)| {
        match (i32::try_from(col), i32::try_from(row)) {
            (Ok(col), Ok(row)) => board.cell_at(col, row) == Ok(Cell::Empty),
            _ => false,
        }
    })
}

/// Occupy the piece's cells. Does not validate; call only after `is_valid`
/// returned true with no intervening board mutation, which also guarantees
/// every cell fits back into board coordinates.
pub fn place_on_board(board: &mut Board, piece: &PlacedPiece) {
    for (col, row) in piece.cells() {
        board.occupy(col as i32, row as i32);
    }
}
