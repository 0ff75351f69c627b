// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The editing actions keys are bound to. See [`crate::KeyBindings`] for the defaults.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum EditCommand {
    /// Insert the typed character at the cursor. This is the default action, so it
    /// receives every byte that isn't bound to something else. Multi-byte UTF-8 input is
    /// collected until a whole character has arrived. Other control bytes are ignored.
    InsertChar,
    /// Delete the character before the cursor.
    Backspace,
    /// Throw away the whole line.
    ClearLine,
    /// Finish the line and hand it to the caller.
    Accept,
    /// End of input (`Ctrl+D`) on an empty line. Ignored when the line has content.
    EndOfInput,
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    /// Recall the next older history entry.
    HistoryPrevious,
    /// Recall the next newer history entry, or a fresh line past the newest.
    HistoryNext,
    /// Replace the line with what the completion hook returns for it.
    Complete,
    ClearScreen,
}
