//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell is either empty or filled with an
//! opaque marker and the color pair of the shape that filled it.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..9 (top to bottom)

use std::num::NonZeroU16;

use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{ColorPair, GRID_SIZE};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// An occupied cell.
///
/// Each cell keeps its own copy of the colors; clearing one cell never touches another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilledCell {
    /// Cosmetic placement marker. Only its presence means anything.
    pub marker: NonZeroU16,
    pub colors: ColorPair,
}

/// A cell on the board. `None` is empty.
pub type Cell = Option<FilledCell>;

/// Rows and columns found complete by one clearing pass, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub cols: ArrayVec<u8, { GRID_SIZE as usize }>,
}

impl ClearedLines {
    pub fn count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game board - 10 x 10 using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
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
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= GRID_SIZE as i16 || y < 0 || y >= GRID_SIZE as i16 {
            return None;
        }
        Some((y as usize) * (GRID_SIZE as usize) + (x as usize))
    }

    /// Get width/height of the board
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `shape` fits with its top-left corner at `(x, y)`.
    ///
    /// Only occupied mask cells are checked, so the anchor may sit outside the
    /// grid as long as every filled cell lands on an empty in-bounds cell.
    pub fn can_place(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().all(|(dx, dy)| {
            self.is_free(x.saturating_add(dx as i16), y.saturating_add(dy as i16))
        })
    }

    /// Fill every mask cell of `shape` at `(x, y)` with `marker` and the shape colors.
    ///
    /// Callers validate with [`Board::can_place`] first; cells that would land
    /// out of bounds are skipped.
    pub fn fill_shape(&mut self, shape: &Shape, x: i16, y: i16, marker: NonZeroU16) {
        let filled = FilledCell {
            marker,
            colors: shape.colors(),
        };
        for (dx, dy) in shape.cells() {
            self.set(
                x.saturating_add(dx as i16),
                y.saturating_add(dy as i16),
                Some(filled),
            );
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_SIZE as usize {
            return false;
        }
        let start = y * GRID_SIZE as usize;
        let end = start + GRID_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, x: usize) -> bool {
        if x >= GRID_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(x)
            .step_by(GRID_SIZE as usize)
            .all(|cell| cell.is_some())
    }

    /// Find every complete row and column, then empty them all.
    ///
    /// Both scans run against the board as it was before any clearing, so a row
    /// and a column crossing at one cell are both reported.
    pub fn clear_full_lines(&mut self) -> ClearedLines {
        let size = GRID_SIZE as usize;
        let mut cleared = ClearedLines::default();

        for y in 0..size {
            if self.is_row_full(y) {
                cleared.rows.push(y as u8);
            }
        }
        for x in 0..size {
            if self.is_col_full(x) {
                cleared.cols.push(x as u8);
            }
        }

        for &y in &cleared.rows {
            let start = y as usize * size;
            self.cells[start..start + size].fill(None);
        }
        for &x in &cleared.cols {
            for y in 0..size {
                self.cells[y * size + x as usize] = None;
            }
        }

        cleared
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major 2D copy, `grid[y][x]`.
    pub fn to_grid(&self) -> [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let size = GRID_SIZE as usize;
        let mut grid = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * size..(y + 1) * size]);
        }
        grid
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
