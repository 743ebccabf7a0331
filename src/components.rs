#![warn(clippy::all, clippy::pedantic)]

use crate::shapes::{Orientation, TetrominoType, shape_offsets};

/// A cell coordinate: `x` is the column, `y` the row (growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A live piece. Only `commit` changes where it sits; every candidate
/// placement goes through `proposed_blocks` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    tetromino_type: TetrominoType,
    orientation: Orientation,
    anchor: Position,
}

impl Tetromino {
    #[must_use]
    pub fn spawn(tetromino_type: TetrominoType, anchor: Position) -> Self {
        Self {
            tetromino_type,
            orientation: Orientation::SPAWN,
            anchor,
        }
    }

    #[must_use]
    pub fn tetromino_type(&self) -> TetrominoType {
        self.tetromino_type
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Absolute blocks of the committed placement.
    #[must_use]
    pub fn blocks(&self) -> [Position; 4] {
        self.proposed_blocks(self.anchor, self.orientation)
    }

    /// Absolute blocks this piece would cover at `anchor` in `orientation`.
    #[must_use]
    pub fn proposed_blocks(&self, anchor: Position, orientation: Orientation) -> [Position; 4] {
        let offsets = *shape_offsets(self.tetromino_type, orientation);
        offsets.map(|(dx, dy)| anchor.offset(dx, dy))
    }

    pub fn commit(&mut self, anchor: Position, orientation: Orientation) {
        self.anchor = anchor;
        self.orientation = orientation;
    }
}
