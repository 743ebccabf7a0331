#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::KeyCode;

use crate::session::Direction;

/// Everything the player can ask for, decoupled from the terminal's key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Rotate,
    Restart,
    Quit,
}

#[must_use]
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Move(Direction::Right)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Move(Direction::Down)),
        KeyCode::Up | KeyCode::Char('w' | ' ') => Some(Command::Rotate),
        KeyCode::Enter => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
