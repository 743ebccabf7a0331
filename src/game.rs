#![warn(clippy::all, clippy::pedantic)]

// Game board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Pieces enter with their anchor block at the top center of the board
pub const SPAWN_COLUMN: i32 = (BOARD_WIDTH / 2) as i32;
pub const SPAWN_ROW: i32 = 0;

// Flat line clear scoring, no level or combo multipliers
pub const POINTS_PER_LINE: u32 = 100;

// Default gravity cadence in milliseconds
pub const GRAVITY_INTERVAL_MS: u64 = 500;

// Wall kick offsets (dx, dy) tried in order when a rotation collides.
// The same list is used for every piece and every rotation step.
pub const WALL_KICK_OFFSETS: [(i32, i32); 7] = [
    (0, 0),   // Rotate in place
    (-1, 0),  // One cell left
    (-2, 0),  // Two cells left
    (1, 0),   // One cell right
    (0, -1),  // One cell up
    (-1, -1), // Up and left
    (1, -1),  // Up and right
];
