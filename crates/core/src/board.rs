//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where each cell is empty or holds the shape that
//! locked there. Rows 0 and 1 are the hidden spawn buffer; renderers show rows
//! 2..22. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::snapshot::SnapshotError;
use crate::types::{cell_code, Cell, Shape, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one [`Board::clear_full_rows`] call
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * WIDTH + (x as usize))
        } else {
            None
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// True iff `0 <= x < 10` and `0 <= y < 22`
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Integer code of the cell at (x, y): 0 when empty or out of bounds
    pub fn code(&self, x: i8, y: i8) -> u8 {
        self.get(x, y).map_or(0, cell_code)
    }

    /// Set cell at position (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board. Callers validate coordinates
    /// first; there is no clamping.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx] = cell,
            None => panic!(
                "board cell ({}, {}) is outside the {}x{} grid",
                x, y, BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff every cell of the piece is inside the board and empty
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Write the piece's shape into each of its cells
    ///
    /// Only called with pieces that passed [`Board::can_place`]; cells outside
    /// the board are skipped rather than written.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if let Some(idx) = Self::index(x, y) {
                self.cells[idx] = Some(piece.shape);
            }
        }
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted bottom to top)
    ///
    /// Scans from the bottom up with a write cursor: surviving rows are
    /// copied down in their original order, the rows left over at the top
    /// are emptied.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        cleared_rows
    }

    /// Clear all full rows, returning how many were removed
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Copy the grid as cell codes into a fixed-size buffer (no allocation)
    pub fn write_code_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = cell_code(self.cells[y * WIDTH + x]);
            }
        }
    }

    /// Grid as owned rows of cell codes, top row first
    pub fn code_rows(&self) -> Vec<Vec<u8>> {
        (0..HEIGHT)
            .map(|y| self.row(y).iter().map(|&c| cell_code(c)).collect())
            .collect()
    }

    /// Rebuild a board from rows of cell codes
    ///
    /// Requires exactly 22 rows of 10 codes, each code in `0..=7`.
    pub fn from_code_rows(rows: &[Vec<u8>]) -> Result<Self, SnapshotError> {
        if rows.len() != HEIGHT {
            return Err(SnapshotError::RowCount {
                expected: HEIGHT,
                found: rows.len(),
            });
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != WIDTH {
                return Err(SnapshotError::ColumnCount {
                    row: y,
                    expected: WIDTH,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = match code {
                    0 => None,
                    _ => Some(
                        Shape::from_code(code)
                            .ok_or(SnapshotError::InvalidCell { x, y, code })?,
                    ),
                };
            }
        }
        Ok(board)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
