//! The boundary between the presenter and a concrete terminal.
//!
//! The presenter never draws directly. It issues requests through
//! [`Screen`], reads keys through [`KeySource`], and relies on
//! [`ScopedTerminal`] to put the terminal back the way it found it.

use crate::config::Key;
use crate::error::Result;
use std::ops::{Deref, DerefMut};

/// How a piece of text should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Drawn with the theme's title color pair.
    Title,
}

/// Output side of the terminal.
pub trait Screen {
    /// Blank the whole screen.
    fn clear(&mut self) -> Result<()>;

    /// Write `text` starting at `row`/`col`. `text` never contains a newline.
    fn put_str(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<()>;

    /// Make everything written since the last refresh visible.
    fn refresh(&mut self) -> Result<()>;
}

/// Input side of the terminal. Blocks until a key is available.
pub trait KeySource {
    fn next_key(&mut self) -> Result<Key>;
}

/// Entering and leaving the interactive terminal mode.
pub trait TerminalMode {
    /// Enter raw/no-echo mode. On error, anything partially set up must be
    /// safe to undo with [`TerminalMode::release`].
    fn acquire(&mut self) -> Result<()>;

    /// Leave raw mode. Must not panic; failures can only be logged.
    fn release(&mut self);
}

/// Owns a terminal in interactive mode and releases it when dropped.
///
/// Dropping happens on every way out of the scope that owns the guard:
/// normal return, `?` propagation and unwinding.
pub struct ScopedTerminal<T: TerminalMode> {
    terminal: T,
}

impl<T: TerminalMode> ScopedTerminal<T> {
    /// Put `terminal` into interactive mode.
    ///
    /// If that fails part-way, the terminal is released before the error is
    /// returned.
    pub fn acquire(mut terminal: T) -> Result<Self> {
        if let Err(err) = terminal.acquire() {
            terminal.release();
            return Err(err);
        }
        log::trace!("Terminal acquired");
        Ok(Self { terminal })
    }
}

impl<T: TerminalMode> Deref for ScopedTerminal<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.terminal
    }
}

impl<T: TerminalMode> DerefMut for ScopedTerminal<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.terminal
    }
}

impl<T: TerminalMode> Drop for ScopedTerminal<T> {
    fn drop(&mut self) {
        self.terminal.release();
        log::trace!("Terminal released");
    }
}
