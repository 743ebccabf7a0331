use crate::board::Board;
use crate::components::{Position, Tetromino};
use crate::session::GameSession;
use crate::shapes::TetrominoType;

/// A seeded session whose current piece is replaced by `kind` at `anchor`.
#[must_use]
pub fn session_with_piece(kind: TetrominoType, anchor: Position) -> GameSession {
    let mut session = GameSession::with_seed(7);
    session.set_current(Tetromino::spawn(kind, anchor));
    session
}

/// Fills `row` completely except for the listed columns.
pub fn fill_row_except(board: &mut Board, row: usize, gaps: &[usize]) {
    for col in 0..board.cols() {
        if !gaps.contains(&col) {
            board.set_cell(col, row, Some(TetrominoType::O));
        }
    }
}

// Helper to fill a board with a specific pattern for testing
pub fn fill_test_board(board: &mut Board, pattern: &[(usize, usize, TetrominoType)]) {
    for &(col, row, tetromino_type) in pattern {
        if col < board.cols() && row < board.rows() {
            board.set_cell(col, row, Some(tetromino_type));
        }
    }
}
