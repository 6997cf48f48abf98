//! Per-player aggregate: the board, the placed fleet, and the
//! remaining-ship counter.

use crate::board::{Board, BoardError};
use crate::config::FLEET_SIZE;
use crate::placement::PlacedPiece;

/// State owned by one player slot. The board does not exist until a
/// successful `Begin`; the fleet list is bounded at [`FLEET_SIZE`].
pub struct PlayerState {
    board: Option<Board>,
    pieces: Vec<PlacedPiece>,
    ships_remaining: u32,
}

impl PlayerState {
    pub fn new() -> Self {
        PlayerState {
            board: None,
            pieces: Vec::with_capacity(FLEET_SIZE),
            ships_remaining: 0,
        }
    }

    /// Create the board and arm the remaining-ship counter. Invoked for both
    /// players when either one sends a valid `Begin`.
    pub fn start(&mut self, width: i32, height: i32) -> Result<(), BoardError> {
        self.board = Some(Board::create(width, height)?);
        self.ships_remaining = FLEET_SIZE as u32;
        Ok(())
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }

    /// True once the fleet holds [`FLEET_SIZE`] pieces.
    pub fn fleet_full(&self) -> bool {
        self.pieces.len() >= FLEET_SIZE
    }

    /// Record a validated piece in placement order.
    pub fn record_piece(&mut self, piece: PlacedPiece) {
        debug_assert!(self.pieces.len() < FLEET_SIZE);
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn ships_remaining(&self) -> u32 {
        self.ships_remaining
    }

    /// Decrement the counter for a shot that turned a `Ship` cell into `Hit`,
    /// returning the new value.
    pub fn register_hit(&mut self) -> u32 {
        self.ships_remaining = self.ships_remaining.saturating_sub(1);
        self.ships_remaining
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
