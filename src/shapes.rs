//! Static catalog of piece geometries: 7 tetromino kinds, 4 rotations each,
//! every rotation exactly 4 cell offsets relative to the anchor.
//!
//! Some rotations repeat geometrically (the square is rotation-invariant, the
//! bar has only two distinct orientations); the table stores them anyway so
//! any `(kind, rotation)` pair in range resolves without special cases.

use crate::config::PIECE_CELLS;

/// Displacement of one occupied cell relative to the piece anchor.
pub type Offset = (i8, i8);

/// Number of piece kinds in the catalog.
pub const NUM_PIECE_KINDS: i32 = 7;
/// Number of rotation variants per kind.
pub const NUM_ROTATIONS: i32 = 4;

/// Piece kind indices: 0 = O, 1 = I, 2 = S, 3 = L, 4 = Z, 5 = J, 6 = T.
const SHAPES: [[[Offset; PIECE_CELLS]; 4]; 7] = [
    // O
    [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
    // I
    [
        [(0, 0), (0, 1), (0, 2), (0, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(0, 0), (0, 1), (0, 2), (0, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
    ],
    // S
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (0, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (0, 1), (0, 2)],
    ],
    // L
    [
        [(0, 0), (1, 0), (2, 0), (2, 1)],
        [(0, 1), (1, 1), (2, 1), (2, 0)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(0, 0), (0, 1), (0, 2), (1, 0)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(0, 1), (1, 1), (1, 0), (2, 0)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(0, 1), (1, 1), (1, 0), (2, 0)],
    ],
    // J
    [
        [(0, 0), (0, 1), (0, 2), (1, 2)],
        [(0, 0), (1, 0), (2, 0), (2, 1)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 0), (0, 1), (1, 0), (2, 0)],
    ],
    // T
    [
        [(0, 0), (1, 0), (2, 0), (1, 1)],
        [(1, 0), (1, 1), (1, 2), (0, 1)],
        [(0, 1), (1, 1), (2, 1), (1, 0)],
        [(1, 0), (1, 1), (1, 2), (2, 1)],
    ],
];

/// Offsets for a piece kind and rotation.
///
/// Callers must validate `kind` against [0, 7) and `rotation` against [0, 4)
/// first; the command dispatcher does so before any lookup.
pub fn offsets(kind: u8, rotation: u8) -> &'static [Offset; PIECE_CELLS] {
    &SHAPES[kind as usize][rotation as usize]
}
