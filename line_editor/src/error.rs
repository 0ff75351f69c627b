// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Type alias to make it easy to work with [`miette::Result`]. Used by the binary and
/// by the logging setup, where errors are reported to the user rather than matched on.
pub type CommonResult<T> = miette::Result<T>;

/// Every way a [`crate::Readline`] session, or one of its parts, can fail.
///
/// None of these are retried. They propagate out of [`crate::Readline::read`] after the
/// terminal mode has been restored.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadlineError {
    /// No action matched and the dispatcher has no default action.
    #[error("unknown command sequence: {sequence:?}")]
    #[diagnostic(
        code(r3bl_line_editor::dispatch::unknown_command),
        help("Register a default action with `Dispatcher::set_default`")
    )]
    UnknownCommand { sequence: Vec<u8> },

    /// An action can't be bound to the empty byte sequence.
    #[error("key sequence must not be empty")]
    #[diagnostic(code(r3bl_line_editor::dispatch::empty_key_sequence))]
    EmptyKeySequence,

    /// Reading input, or reading / writing the history file, failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_editor::io))]
    Io(#[from] io::Error),

    /// The display accepted fewer bytes than it was given.
    #[error("not enough bytes were written: {written} of {expected}")]
    #[diagnostic(code(r3bl_line_editor::display::partial_write))]
    PartialWrite { expected: usize, written: usize },

    /// Getting or setting terminal attributes failed.
    #[error("failed to {operation} terminal attributes")]
    #[diagnostic(
        code(r3bl_line_editor::terminal::mode),
        help("Is stdin (or /dev/tty) attached to a terminal?")
    )]
    TerminalMode {
        operation: TerminalOperation,
        #[source]
        source: io::Error,
    },
}

/// Which terminal mode operation failed, see [`ReadlineError::TerminalMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TerminalOperation {
    #[strum(serialize = "open the controlling terminal for")]
    Open,
    #[strum(serialize = "retrieve")]
    Retrieve,
    #[strum(serialize = "apply")]
    Apply,
    #[strum(serialize = "restore")]
    Restore,
}
