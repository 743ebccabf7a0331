#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are small, casts between usize and i32 cannot truncate or wrap
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    // Values are checked to be non-negative before casting to usize
    clippy::cast_sign_loss
)]

use log::{debug, trace};

use crate::components::Position;
use crate::shapes::TetrominoType;

/// The settled blocks. Rows are stored top to bottom, so `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Option<TetrominoType>>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![None; width]; height],
        }
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.height
    }

    /// Kind that settled at `(col, row)`, `None` for empty or off-board cells.
    #[must_use]
    pub fn cell(&self, col: i32, row: i32) -> Option<TetrominoType> {
        if !self.contains(col, row) {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    #[must_use]
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        self.cell(col, row).is_some()
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells
            .get(row)
            .is_some_and(|cells| cells.iter().all(Option::is_some))
    }

    /// Whether every block fits: inside the side walls, above the floor and
    /// off settled cells. Blocks above row 0 are only held to the side walls.
    #[must_use]
    pub fn is_valid_placement(&self, blocks: &[Position]) -> bool {
        blocks.iter().all(|block| {
            if block.x < 0 || block.x >= self.width as i32 || block.y >= self.height as i32 {
                return false;
            }
            block.y < 0 || self.cells[block.y as usize][block.x as usize].is_none()
        })
    }

    /// Settles `blocks` into the grid. Blocks above the visible area, or
    /// otherwise off the board, are skipped.
    pub fn lock(&mut self, tetromino_type: TetrominoType, blocks: &[Position]) {
        for block in blocks {
            if self.contains(block.x, block.y) {
                self.cells[block.y as usize][block.x as usize] = Some(tetromino_type);
            } else {
                trace!("Skipping off-board block at ({}, {})", block.x, block.y);
            }
        }
    }

    /// Removes every full row and returns how many went.
    ///
    /// Rows are scanned top to bottom. Removing a row only moves the rows
    /// above it, which were already checked, so one pass finds them all.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;

        for row in 0..self.height {
            if self.is_row_full(row) {
                self.cells.remove(row);
                self.cells.insert(0, vec![None; self.width]);
                cleared += 1;
                debug!("Cleared row {row}");
            }
        }

        cleared
    }

    /// Occupancy grid, `snapshot[row][col]`.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Option::is_some).collect())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, col: usize, row: usize, cell: Option<TetrominoType>) {
        self.cells[row][col] = cell;
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }
}
