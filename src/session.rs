#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Line counts never exceed the board height
    clippy::cast_possible_truncation
)]

//! The game controller.
//!
//! A [`GameSession`] owns the board, the falling piece, the next piece and the
//! score. Every move and rotation is checked against a candidate placement
//! before it is committed, so a rejected input never leaves the piece half
//! moved. The only terminal condition is a spawn that does not fit, which
//! moves the session to [`GamePhase::GameOver`] and notifies the listener once.

use std::fmt;

use log::{debug, info, trace};

use crate::board::Board;
use crate::components::{Position, Tetromino};
use crate::game::{
    BOARD_HEIGHT, BOARD_WIDTH, POINTS_PER_LINE, SPAWN_COLUMN, SPAWN_ROW, WALL_KICK_OFFSETS,
};
use crate::shapes::TetrominoType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// A piece is active.
    Falling,
    /// The last downward move failed and the piece is being settled.
    Locking,
    /// Full rows are removed and the score is updated.
    Cleared,
    /// A new piece could not be placed. Nothing changes after this.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Blocked sideways, or any move with no downward component.
    Rejected,
    /// Blocked downward: the piece settled and the next one spawned.
    Locked { lines_cleared: u32 },
    /// Blocked downward and the next piece did not fit.
    GameOver { final_score: u32 },
    /// The session is already over.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// Rotated after shifting the anchor by `kick` (`(0, 0)` for in place).
    Rotated { kick: (i32, i32) },
    Rejected,
    /// O pieces do not rotate, and nothing rotates once the game is over.
    Ignored,
}

type GameOverListener = Box<dyn FnMut(u32) + Send>;

pub struct GameSession {
    board: Board,
    current: Tetromino,
    next: TetrominoType,
    score: u32,
    lines_cleared: u32,
    phase: GamePhase,
    rng: fastrand::Rng,
    game_over_listener: Option<GameOverListener>,
    game_over_notified: bool,
}

impl GameSession {
    /// A session with an unseeded random piece sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// A session whose piece sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(mut rng: fastrand::Rng) -> Self {
        let first = TetrominoType::random(&mut rng);
        let next = TetrominoType::random(&mut rng);

        let mut session = Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            current: Tetromino::spawn(first, Self::spawn_anchor()),
            next,
            score: 0,
            lines_cleared: 0,
            phase: GamePhase::Falling,
            rng,
            game_over_listener: None,
            game_over_notified: false,
        };

        if !session.board.is_valid_placement(&session.current.blocks()) {
            session.end_game();
        }

        session
    }

    /// Registers the callback fired once, with the final score, when the
    /// session ends. If it already ended with nobody listening, the callback
    /// fires immediately.
    pub fn set_game_over_listener<F>(&mut self, listener: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.game_over_listener = Some(Box::new(listener));
        if self.phase == GamePhase::GameOver {
            self.notify_game_over();
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn board_snapshot(&self) -> Vec<Vec<bool>> {
        self.board.snapshot()
    }

    #[must_use]
    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    #[must_use]
    pub fn current_blocks(&self) -> [Position; 4] {
        self.current.blocks()
    }

    #[must_use]
    pub fn next_type(&self) -> TetrominoType {
        self.next
    }

    /// Blocks of the next piece as it will sit when it spawns.
    #[must_use]
    pub fn next_blocks(&self) -> [Position; 4] {
        Tetromino::spawn(self.next, Self::spawn_anchor()).blocks()
    }

    pub fn move_mino(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_tetromino(dx, dy)
    }

    pub fn rotate_mino(&mut self) -> RotateOutcome {
        self.rotate()
    }

    /// Gravity step, same as moving down one row.
    pub fn tick(&mut self) -> MoveOutcome {
        self.move_tetromino(0, 1)
    }

    /// Shifts the piece by `(dx, dy)` cells if the result fits.
    ///
    /// A blocked move with a downward component settles the piece where it
    /// is, clears full rows and brings in the next piece. Any other blocked
    /// move leaves the piece untouched.
    pub fn move_tetromino(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if self.is_game_over() {
            return MoveOutcome::Ignored;
        }

        let anchor = self.current.anchor().offset(dx, dy);
        let orientation = self.current.orientation();
        let candidate = self.current.proposed_blocks(anchor, orientation);

        if self.board.is_valid_placement(&candidate) {
            self.current.commit(anchor, orientation);
            return MoveOutcome::Moved;
        }

        if dy > 0 {
            return self.lock_current();
        }

        MoveOutcome::Rejected
    }

    /// Turns the piece to its next orientation, trying each wall kick in
    /// order. The first placement that fits is committed; if none fits the
    /// piece keeps its orientation and anchor.
    pub fn rotate(&mut self) -> RotateOutcome {
        if self.is_game_over() || !self.current.tetromino_type().rotates() {
            return RotateOutcome::Ignored;
        }

        let orientation = self.current.orientation().next();
        let base = self.current.anchor();

        for &(dx, dy) in &WALL_KICK_OFFSETS {
            let anchor = base.offset(dx, dy);
            let candidate = self.current.proposed_blocks(anchor, orientation);
            if self.board.is_valid_placement(&candidate) {
                self.current.commit(anchor, orientation);
                if (dx, dy) != (0, 0) {
                    debug!("Wall kick succeeded with offset ({dx}, {dy})");
                }
                return RotateOutcome::Rotated { kick: (dx, dy) };
            }
        }

        debug!(
            "Rotation of {} to orientation {} rejected",
            self.current.tetromino_type(),
            orientation.get()
        );
        RotateOutcome::Rejected
    }

    /// Makes the pre-drawn piece current at the spawn anchor and draws a new
    /// next piece. Returns `false` and ends the game if it does not fit.
    pub fn spawn_next(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.current = Tetromino::spawn(self.next, Self::spawn_anchor());
        self.next = TetrominoType::random(&mut self.rng);

        if !self.board.is_valid_placement(&self.current.blocks()) {
            self.end_game();
            return false;
        }

        self.set_phase(GamePhase::Falling);
        true
    }

    fn lock_current(&mut self) -> MoveOutcome {
        self.set_phase(GamePhase::Locking);
        self.board
            .lock(self.current.tetromino_type(), &self.current.blocks());

        let cleared = self.board.clear_full_lines() as u32;
        self.set_phase(GamePhase::Cleared);
        if cleared > 0 {
            self.lines_cleared += cleared;
            self.score += POINTS_PER_LINE * cleared;
            info!("Cleared {cleared} line(s), score is now {}", self.score);
        }

        if self.spawn_next() {
            MoveOutcome::Locked {
                lines_cleared: cleared,
            }
        } else {
            MoveOutcome::GameOver {
                final_score: self.score,
            }
        }
    }

    fn end_game(&mut self) {
        self.set_phase(GamePhase::GameOver);
        info!("Game over with score {}", self.score);
        self.notify_game_over();
    }

    fn notify_game_over(&mut self) {
        if self.game_over_notified {
            return;
        }
        if let Some(listener) = self.game_over_listener.as_mut() {
            listener(self.score);
            self.game_over_notified = true;
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        trace!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn spawn_anchor() -> Position {
        Position::new(SPAWN_COLUMN, SPAWN_ROW)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, current: Tetromino) {
        self.current = current;
    }

    #[cfg(test)]
    pub(crate) fn set_next_type(&mut self, next: TetrominoType) {
        self.next = next;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("current", &self.current)
            .field("next", &self.next)
            .field("score", &self.score)
            .field("lines_cleared", &self.lines_cleared)
            .field("phase", &self.phase)
            .field("has_game_over_listener", &self.game_over_listener.is_some())
            .finish_non_exhaustive()
    }
}
