// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, CARRIAGE_RETURN, CTRL_C,
            CTRL_D, CTRL_H, CTRL_L, CTRL_U, DELETE, Dispatcher, END, EditCommand, HOME,
            KeySequence, NEWLINE, ReadlineError, TAB};

/// Which byte sequences trigger which [`EditCommand`]. Later bindings for the same
/// sequence replace earlier ones.
///
/// The default table:
///
/// | Keys                       | Command                          |
/// |----------------------------|----------------------------------|
/// | any other byte             | [`EditCommand::InsertChar`]      |
/// | `Backspace`, `Ctrl+H`      | [`EditCommand::Backspace`]       |
/// | `Ctrl+U`, `Ctrl+C`         | [`EditCommand::ClearLine`]       |
/// | `Enter` (`\n` or `\r`)     | [`EditCommand::Accept`]          |
/// | `Ctrl+D`                   | [`EditCommand::EndOfInput`]      |
/// | `Left`, `Right`            | [`EditCommand::MoveLeft`], [`EditCommand::MoveRight`] |
/// | `Home`, `End`              | [`EditCommand::MoveToStart`], [`EditCommand::MoveToEnd`] |
/// | `Up`, `Down`               | [`EditCommand::HistoryPrevious`], [`EditCommand::HistoryNext`] |
/// | `Tab`                      | [`EditCommand::Complete`]        |
/// | `Ctrl+L`                   | [`EditCommand::ClearScreen`]     |
///
/// With the `emacs` feature (on by default) `Ctrl+A` and `Ctrl+E` also move to the
/// start and end of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<(KeySequence, EditCommand)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut it = Self::empty();
        it.bind(&[DELETE], EditCommand::Backspace)
            .bind(&[CTRL_H], EditCommand::Backspace)
            .bind(&[CTRL_U], EditCommand::ClearLine)
            .bind(&[CTRL_C], EditCommand::ClearLine)
            .bind(&[NEWLINE], EditCommand::Accept)
            .bind(&[CARRIAGE_RETURN], EditCommand::Accept)
            .bind(&[CTRL_D], EditCommand::EndOfInput)
            .bind(&ARROW_LEFT, EditCommand::MoveLeft)
            .bind(&ARROW_RIGHT, EditCommand::MoveRight)
            .bind(&HOME, EditCommand::MoveToStart)
            .bind(&END, EditCommand::MoveToEnd)
            .bind(&ARROW_UP, EditCommand::HistoryPrevious)
            .bind(&ARROW_DOWN, EditCommand::HistoryNext)
            .bind(&[TAB], EditCommand::Complete)
            .bind(&[CTRL_L], EditCommand::ClearScreen);

        #[cfg(feature = "emacs")]
        {
            use crate::{CTRL_A, CTRL_E};
            it.bind(&[CTRL_A], EditCommand::MoveToStart)
                .bind(&[CTRL_E], EditCommand::MoveToEnd);
        }

        it
    }
}

impl KeyBindings {
    /// No bindings at all. Every byte is inserted as text.
    #[must_use]
    pub fn empty() -> Self { Self { bindings: vec![] } }

    pub fn bind(&mut self, sequence: &[u8], command: EditCommand) -> &mut Self {
        self.bindings.push((sequence.into(), command));
        self
    }

    /// The command `sequence` is bound to, if any.
    #[must_use]
    pub fn get(&self, sequence: &[u8]) -> Option<EditCommand> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound.as_slice() == sequence)
            .map(|(_, command)| *command)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], EditCommand)> {
        self.bindings
            .iter()
            .map(|(sequence, command)| (sequence.as_slice(), *command))
    }

    /// Build the dispatcher for these bindings, with [`EditCommand::InsertChar`] as the
    /// default action.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::EmptyKeySequence`] if a binding has an empty sequence.
    pub fn try_build_dispatcher(&self) -> Result<Dispatcher<EditCommand>, ReadlineError> {
        let mut dispatcher = Dispatcher::new();
        for (sequence, command) in self.iter() {
            dispatcher.register(sequence, command)?;
        }
        dispatcher.set_default(EditCommand::InsertChar);
        Ok(dispatcher)
    }
}
