//! Fixed protocol constants shared across the crate.

/// Default listen port for the player who moves first.
pub const PORT_PLAYER_ONE: u16 = 2201;
/// Default listen port for the second player.
pub const PORT_PLAYER_TWO: u16 = 2202;

/// Smallest board dimension the `Begin` command accepts.
pub const MIN_BOARD_DIM: i32 = 10;
/// Ships per fleet; also the initial remaining-ship counter.
pub const FLEET_SIZE: usize = 5;
/// Cells occupied by every piece.
pub const PIECE_CELLS: usize = 4;
