// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ReadlineError, TerminalOperation, TerminalPort};
use std::{io,
          sync::{Arc, Mutex}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMockEvent {
    Apply,
    Reset,
}

/// [`TerminalPort`] that records calls instead of touching a tty. Clones share the
/// recorded events, like [`super::StdoutMock`] shares its buffer.
#[derive(Debug, Clone, Default)]
pub struct TerminalMock {
    pub events: Arc<Mutex<Vec<TerminalMockEvent>>>,
    pub fail_apply: bool,
    pub fail_reset: bool,
}

impl TerminalMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// # Panics
    ///
    /// If the lock is poisoned.
    #[must_use]
    pub fn get_events(&self) -> Vec<TerminalMockEvent> { self.events.lock().unwrap().clone() }

    fn record(&self, event: TerminalMockEvent) { self.events.lock().unwrap().push(event); }
}

impl TerminalPort for TerminalMock {
    fn apply(&mut self) -> Result<(), ReadlineError> {
        self.record(TerminalMockEvent::Apply);
        if self.fail_apply {
            return Err(ReadlineError::TerminalMode {
                operation: TerminalOperation::Apply,
                source: io::Error::other("apply failed"),
            });
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ReadlineError> {
        self.record(TerminalMockEvent::Reset);
        if self.fail_reset {
            return Err(ReadlineError::TerminalMode {
                operation: TerminalOperation::Restore,
                source: io::Error::other("reset failed"),
            });
        }
        Ok(())
    }
}
