#![warn(clippy::all, clippy::pedantic)]

use std::io::{self, Write};

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard puts the terminal back, so an early return or a panic
/// between setup and shutdown still leaves a usable shell.
pub struct TerminalGuard<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            restored: false,
        };
        // Raw mode is already on; a failure here is undone by the drop
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Leaves raw mode and the alternate screen. Only the first call has
    /// any effect.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.out, LeaveAlternateScreen, cursor::Show)
    }

    #[cfg(test)]
    pub(crate) fn entered(out: W) -> Self {
        Self {
            out,
            restored: false,
        }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {e}");
        }
    }
}
