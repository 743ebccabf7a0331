#![warn(clippy::all, clippy::pedantic)]

//! Block layouts for every tetromino kind and orientation.
//!
//! Offsets are `(dx, dy)` in cells relative to the anchor block, with `dy`
//! growing downward. Block index 0 is always the anchor itself.

use std::fmt;

pub type BlockOffsets = [(i32, i32); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::J,
        TetrominoType::L,
        TetrominoType::O,
        TetrominoType::S,
        TetrominoType::T,
        TetrominoType::Z,
    ];

    /// Uniform, independent draw. Repeats are allowed.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    #[must_use]
    pub fn rotates(self) -> bool {
        self != TetrominoType::O
    }
}

impl fmt::Display for TetrominoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TetrominoType::I => "I",
            TetrominoType::J => "J",
            TetrominoType::L => "L",
            TetrominoType::O => "O",
            TetrominoType::S => "S",
            TetrominoType::T => "T",
            TetrominoType::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Rotation state, numbered 1 through 4 and wrapping from 4 back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation(u8);

impl Orientation {
    pub const SPAWN: Orientation = Orientation(1);

    /// Builds an orientation from its number, `None` outside `1..=4`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=4).contains(&value).then_some(Orientation(value))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Orientation(self.0 % 4 + 1)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::SPAWN
    }
}

const I_VERTICAL: BlockOffsets = [(0, 0), (0, -1), (0, 1), (0, 2)];
const I_HORIZONTAL: BlockOffsets = [(0, 0), (-1, 0), (1, 0), (2, 0)];

const O_SQUARE: BlockOffsets = [(0, 0), (1, 0), (0, 1), (1, 1)];

const T_SHAPES: [BlockOffsets; 4] = [
    [(0, 0), (-1, 0), (1, 0), (0, 1)],
    [(0, 0), (0, -1), (0, 1), (-1, 0)],
    [(0, 0), (1, 0), (-1, 0), (0, -1)],
    [(0, 0), (0, 1), (0, -1), (1, 0)],
];

const S_FLAT: BlockOffsets = [(0, 0), (1, 0), (0, 1), (-1, 1)];
const S_UPRIGHT: BlockOffsets = [(0, 0), (0, -1), (1, 0), (1, 1)];

const Z_FLAT: BlockOffsets = [(0, 0), (-1, 0), (0, 1), (1, 1)];
const Z_UPRIGHT: BlockOffsets = [(0, 0), (0, -1), (-1, 0), (-1, 1)];

const J_SHAPES: [BlockOffsets; 4] = [
    [(0, 0), (0, -1), (0, 1), (-1, 1)],
    [(0, 0), (1, 0), (-1, 0), (-1, -1)],
    [(0, 0), (0, 1), (0, -1), (1, -1)],
    [(0, 0), (-1, 0), (1, 0), (1, 1)],
];

const L_SHAPES: [BlockOffsets; 4] = [
    [(0, 0), (0, -1), (0, 1), (1, 1)],
    [(0, 0), (1, 0), (-1, 0), (-1, 1)],
    [(0, 0), (0, 1), (0, -1), (-1, -1)],
    [(0, 0), (-1, 0), (1, 0), (1, -1)],
];

/// Relative block offsets for `kind` in `orientation`.
///
/// I, S and Z only have two distinct layouts, so orientations 3 and 4 repeat
/// 1 and 2. O has one layout.
#[must_use]
pub fn shape_offsets(kind: TetrominoType, orientation: Orientation) -> &'static BlockOffsets {
    let index = usize::from(orientation.get() - 1);
    let turned = index % 2 == 1;

    match kind {
        TetrominoType::I if turned => &I_HORIZONTAL,
        TetrominoType::I => &I_VERTICAL,
        TetrominoType::O => &O_SQUARE,
        TetrominoType::S if turned => &S_UPRIGHT,
        TetrominoType::S => &S_FLAT,
        TetrominoType::Z if turned => &Z_UPRIGHT,
        TetrominoType::Z => &Z_FLAT,
        TetrominoType::T => &T_SHAPES[index],
        TetrominoType::J => &J_SHAPES[index],
        TetrominoType::L => &L_SHAPES[index],
    }
}
