// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal mode port and the RAII guard that scopes raw mode to one read session.

use crate::{ReadlineError, ok};

/// Switches the terminal into the editing mode and back.
pub trait TerminalPort {
    /// Put the terminal into editing (raw) mode.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::TerminalMode`] if the terminal attributes can't be set.
    fn apply(&mut self) -> Result<(), ReadlineError>;

    /// Restore the terminal to the mode it was in before [`Self::apply`].
    ///
    /// # Errors
    ///
    /// [`ReadlineError::TerminalMode`] if the terminal attributes can't be set.
    fn reset(&mut self) -> Result<(), ReadlineError>;
}

impl<T: TerminalPort + ?Sized> TerminalPort for Box<T> {
    fn apply(&mut self) -> Result<(), ReadlineError> { (**self).apply() }

    fn reset(&mut self) -> Result<(), ReadlineError> { (**self).reset() }
}

/// [`TerminalPort`] that does nothing. For input that isn't a terminal (a pipe, a file,
/// a test), where there is no mode to switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopTerminal;

impl TerminalPort for NoopTerminal {
    fn apply(&mut self) -> Result<(), ReadlineError> { ok!() }

    fn reset(&mut self) -> Result<(), ReadlineError> { ok!() }
}

/// RAII guard that applies the terminal mode on creation and resets it when dropped.
///
/// Use [`Self::release`] on the success path, so a failed reset is reported to the
/// caller. On every other path (an early `?` return, a panic) [`Drop`] resets the
/// terminal and can only log a failure.
#[derive(Debug)]
pub struct TerminalModeGuard<'a, T: TerminalPort> {
    terminal: &'a mut T,
    is_released: bool,
}

impl<'a, T: TerminalPort> TerminalModeGuard<'a, T> {
    /// Create a new guard and apply the terminal mode.
    ///
    /// # Errors
    ///
    /// Returns the error from [`TerminalPort::apply`]. Nothing needs restoring then, and
    /// no guard is created.
    pub fn try_new(terminal: &'a mut T) -> Result<Self, ReadlineError> {
        terminal.apply()?;
        Ok(Self {
            terminal,
            is_released: false,
        })
    }

    /// Reset the terminal mode now.
    ///
    /// # Errors
    ///
    /// Returns the error from [`TerminalPort::reset`].
    pub fn release(mut self) -> Result<(), ReadlineError> {
        self.is_released = true;
        self.terminal.reset()
    }
}

impl<T: TerminalPort> Drop for TerminalModeGuard<'_, T> {
    fn drop(&mut self) {
        if self.is_released {
            return;
        }
        if let Err(error) = self.terminal.reset() {
            tracing::error!(
                message = "Failed to restore terminal mode",
                error = ?error
            );
        }
    }
}
