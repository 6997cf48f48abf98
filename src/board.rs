//! Grid of cell states backing one player's side of the game.

use core::fmt;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
}

/// Errors returned by board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Requested width or height is not positive.
    InvalidDimensions,
    /// Cell coordinate lies outside the grid.
    OutOfBounds,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions => write!(f, "board dimensions must be positive"),
            BoardError::OutOfBounds => write!(f, "cell coordinate is out of bounds"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A fixed-size grid of cells. Dimensions are set at creation and never
/// change; the whole board is dropped with its owning player at session end.
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocate a `width x height` grid of `Empty` cells.
    ///
    /// The protocol minimum of 10x10 is enforced by the `Begin` handler;
    /// this only rejects dimensions the grid itself cannot represent.
    pub fn create(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; (width as usize) * (height as usize)],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether (col, row) lies within the grid.
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.width && row >= 0 && row < self.height
    }

    /// Bounds-checked cell read.
    pub fn cell_at(&self, col: i32, row: i32) -> Result<Cell, BoardError> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Transition a cell `Empty` -> `Ship`.
    ///
    /// Callers must have validated the cell through the placement validator;
    /// occupying a non-empty or out-of-range cell is a contract violation.
    pub fn occupy(&mut self, col: i32, row: i32) {
        if let Ok(i) = self.index(col, row) {
            debug_assert_eq!(self.cells[i], Cell::Empty);
            self.cells[i] = Cell::Ship;
        }
    }

    /// Transition a cell `Ship` -> `Hit`.
    pub fn mark_hit(&mut self, col: i32, row: i32) {
        if let Ok(i) = self.index(col, row) {
            debug_assert_eq!(self.cells[i], Cell::Ship);
            self.cells[i] = Cell::Hit;
        }
    }

    fn index(&self, col: i32, row: i32) -> Result<usize, BoardError> {
        if !self.in_bounds(col, row) {
            return Err(BoardError::OutOfBounds);
        }
        Ok((row as usize) * (self.width as usize) + col as usize)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.width, self.height)?;
        for row in 0..self.height {
            write!(f, "  ")?;
            for col in 0..self.width {
                let c = match self.cells[(row * self.width + col) as usize] {
                    Cell::Empty => '.',
                    Cell::Ship => 'S',
                    Cell::Hit => 'X',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
