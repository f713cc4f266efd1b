//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell can be empty or filled with a color tag.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..7 (top to bottom), col ranges 0..7
//! (left to right). Shapes address the board through relative (dr, dc) offsets
//! added to a placement origin.

use arrayvec::ArrayVec;

use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Full rows and columns detected after a placement
///
/// Both scans read the same board state, so a single cell may count toward
/// a full row and a full column at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullLines {
    /// Indices of completely occupied rows (ascending)
    pub rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
    /// Indices of completely occupied columns (ascending)
    pub cols: ArrayVec<u8, { BOARD_WIDTH as usize }>,
}

impl FullLines {
    /// Total number of lines (rows + columns)
    pub fn total(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    /// True when no row or column is full
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// A single cell emptied by a line clear, reported for particle effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedCell {
    pub row: u8,
    pub col: u8,
    pub color: ColorTag,
}

/// The game board - 8x8 grid using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check whether a shape fits with its anchor at (row, col)
    ///
    /// Every offset cell must be in bounds and empty. No side effects;
    /// origins anywhere in the i8 range simply fail the check when the
    /// shape pokes outside the grid.
    pub fn fits(&self, offsets: &[(i8, i8)], row: i8, col: i8) -> bool {
        offsets.iter().all(|&(dr, dc)| {
            // Widened so extreme origins cannot overflow the addition
            let r = row as i16 + dr as i16;
            let c = col as i16 + dc as i16;
            (0..BOARD_HEIGHT as i16).contains(&r)
                && (0..BOARD_WIDTH as i16).contains(&c)
                && self.is_valid(r as i8, c as i8)
        })
    }

    /// Place a shape with its anchor at (row, col)
    ///
    /// Returns the number of newly occupied cells, or None if the shape does
    /// not fit (the board is left unchanged - the "snap back" path).
    pub fn place(&mut self, offsets: &[(i8, i8)], row: i8, col: i8, color: ColorTag) -> Option<u32> {
        if !self.fits(offsets, row, col) {
            return None;
        }

        for &(dr, dc) in offsets {
            self.set(row + dr, col + dc, Some(color));
        }

        Some(offsets.len() as u32)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_WIDTH as usize {
            return false;
        }
        (0..BOARD_HEIGHT as usize).all(|row| self.cells[row * BOARD_WIDTH as usize + col].is_some())
    }

    /// Detect all full rows and columns
    ///
    /// Pure and idempotent: both scans read the same board state, so calling
    /// this twice without a mutation in between yields identical results.
    pub fn full_lines(&self) -> FullLines {
        let mut lines = FullLines::default();
        for row in 0..BOARD_HEIGHT {
            if self.is_row_full(row as usize) {
                lines.rows.push(row);
            }
        }
        for col in 0..BOARD_WIDTH {
            if self.is_col_full(col as usize) {
                lines.cols.push(col);
            }
        }
        lines
    }

    /// Empty every cell belonging to a listed row or column
    ///
    /// Returns one entry per distinct cleared cell; a cell at a row/column
    /// intersection is cleared and reported exactly once.
    pub fn clear_lines(&mut self, lines: &FullLines) -> ArrayVec<ClearedCell, BOARD_SIZE> {
        let mut cleared = ArrayVec::new();

        for &row in &lines.rows {
            for col in 0..BOARD_WIDTH {
                self.take_cell(row, col, &mut cleared);
            }
        }
        for &col in &lines.cols {
            for row in 0..BOARD_HEIGHT {
                // Intersection cells were already taken by the row pass
                self.take_cell(row, col, &mut cleared);
            }
        }

        cleared
    }

    /// Record and empty a single cell if it is occupied
    fn take_cell(&mut self, row: u8, col: u8, out: &mut ArrayVec<ClearedCell, BOARD_SIZE>) {
        let idx = (row as usize) * (BOARD_WIDTH as usize) + (col as usize);
        if let Some(color) = self.cells[idx].take() {
            out.push(ClearedCell { row, col, color });
        }
    }

    /// Check if the entire board is empty
    ///
    /// Evaluated after `clear_lines` for perfect-clear detection.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Write the grid as palette indices (0 = empty, 1-5 = color index + 1)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for row in 0..BOARD_HEIGHT as usize {
            for col in 0..BOARD_WIDTH as usize {
                out[row][col] = match self.cells[row * BOARD_WIDTH as usize + col] {
                    Some(color) => color.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (row, cells) in cells_2d.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                flat[row * BOARD_WIDTH as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
