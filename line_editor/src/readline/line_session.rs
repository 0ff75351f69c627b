// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPort, EditCommand, HistoryFile, HistoryView, LineBuffer, Matched,
            ReadlineError, ReadlineEvent, ok};
use smallvec::SmallVec;
use std::ops::ControlFlow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Called with the current line when [`EditCommand::Complete`] fires. Returns the
/// replacement line.
pub type CompletionHook = Box<dyn FnMut(&str) -> String>;

/// Called at the start of every [`crate::Readline::read`]. Returns the prompt to show.
pub type PromptHook = Box<dyn FnMut() -> String>;

/// What [`LineSession::apply`] tells the read loop.
pub type SessionControl = ControlFlow<ReadlineEvent>;

/// Everything that lives across keypresses: the line, the history, and what the prompt
/// looks like. Each [`EditCommand`] handler mutates this and redraws through a
/// [`DisplayPort`].
#[derive(Debug, Default)]
pub struct LineSession {
    pub buffer: LineBuffer,
    pub history: HistoryView,
    pub history_file: Option<HistoryFile>,
    pub prompt: String,
    /// Columns the prompt occupies on screen. The line starts at this column.
    pub prompt_width: usize,
    /// Leading bytes of a UTF-8 character whose remaining bytes haven't arrived yet.
    pending_utf8: SmallVec<[u8; 4]>,
}

/// Display width of `prompt`, ignoring any ANSI escape sequences (colors etc) in it.
#[must_use]
pub fn prompt_display_width(prompt: &str) -> usize {
    strip_ansi_escapes::strip_str(prompt).width()
}

impl LineSession {
    #[must_use]
    pub fn new(buffer: LineBuffer, history: HistoryView) -> Self {
        Self {
            buffer,
            history,
            ..Default::default()
        }
    }

    /// Start a new line: empty buffer, prompt at column 0.
    ///
    /// # Errors
    ///
    /// If the display fails.
    pub fn begin(
        &mut self,
        prompt: String,
        display: &mut dyn DisplayPort,
    ) -> Result<(), ReadlineError> {
        self.buffer.clear();
        self.pending_utf8.clear();
        self.prompt_width = prompt_display_width(&prompt);
        self.prompt = prompt;

        display.move_cursor_to(0)?;
        display.write_text(&self.prompt)?;
        display.flush()
    }

    /// Run one command and flush what it drew.
    ///
    /// # Errors
    ///
    /// If the display fails, or a committed line can't be appended to the history
    /// file.
    pub fn apply(
        &mut self,
        matched: Matched<EditCommand>,
        display: &mut dyn DisplayPort,
        completion_hook: Option<&mut CompletionHook>,
    ) -> Result<SessionControl, ReadlineError> {
        tracing::trace!(
            message = "dispatch",
            command = %matched.action,
            sequence = ?matched.sequence.as_slice()
        );

        let control = match matched.action {
            EditCommand::InsertChar => self.handle_insert_char(matched.byte, display)?,
            EditCommand::Backspace => self.handle_backspace(display)?,
            EditCommand::ClearLine => self.handle_clear_line(display)?,
            EditCommand::Accept => ControlFlow::Break(self.handle_accept(display)?),
            EditCommand::EndOfInput => self.handle_end_of_input(),
            EditCommand::MoveLeft => self.handle_move_left(display)?,
            EditCommand::MoveRight => self.handle_move_right(display)?,
            EditCommand::MoveToStart => {
                self.buffer.move_to_start();
                self.reposition_cursor(display)?
            }
            EditCommand::MoveToEnd => {
                self.buffer.move_to_end();
                self.reposition_cursor(display)?
            }
            EditCommand::HistoryPrevious => self.handle_history(display, true)?,
            EditCommand::HistoryNext => self.handle_history(display, false)?,
            EditCommand::Complete => self.handle_complete(display, completion_hook)?,
            EditCommand::ClearScreen => self.handle_clear_screen(display)?,
        };

        display.flush()?;
        Ok(control)
    }

    /// The input stream ended before the line was accepted. A partial line is committed
    /// as if Enter was pressed, an empty one ends input.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn finish_at_end_of_stream(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<ReadlineEvent, ReadlineError> {
        if self.buffer.is_empty() {
            return Ok(ReadlineEvent::Eof);
        }
        let event = self.handle_accept(display)?;
        display.flush()?;
        Ok(event)
    }

    fn handle_insert_char(
        &mut self,
        byte: u8,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        let Some(ch) = self.decode_utf8(byte) else {
            return ok!(ControlFlow::Continue(()));
        };

        if ch.is_control() {
            tracing::trace!(message = "Ignoring unbound control character", byte = byte);
            return ok!(ControlFlow::Continue(()));
        }

        let is_at_end = self.buffer.is_cursor_at_end();
        if !self.buffer.insert(ch) {
            tracing::debug!(
                message = "Line is at its maximum length, dropping input",
                max_len = ?self.buffer.max_len()
            );
            return ok!(ControlFlow::Continue(()));
        }

        if is_at_end {
            let mut encoded = [0_u8; 4];
            display.write_text(ch.encode_utf8(&mut encoded))?;
        } else {
            self.redraw(display)?;
        }
        ok!(ControlFlow::Continue(()))
    }

    /// Collect `byte` and return the character once all of its bytes have arrived.
    fn decode_utf8(&mut self, byte: u8) -> Option<char> {
        if byte.is_ascii() {
            if !self.pending_utf8.is_empty() {
                tracing::warn!(
                    message = "Dropping incomplete UTF-8 sequence",
                    bytes = ?self.pending_utf8.as_slice()
                );
                self.pending_utf8.clear();
            }
            return Some(char::from(byte));
        }

        self.pending_utf8.push(byte);
        match std::str::from_utf8(&self.pending_utf8) {
            Ok(decoded) => {
                let maybe_char = decoded.chars().next();
                self.pending_utf8.clear();
                maybe_char
            }
            // More bytes of this character are on the way.
            Err(error) if error.error_len().is_none() => None,
            // `byte` cut the pending character short, it may start the next one.
            Err(_) if self.pending_utf8.len() > 1 => {
                self.pending_utf8.pop();
                tracing::warn!(
                    message = "Dropping incomplete UTF-8 sequence",
                    bytes = ?self.pending_utf8.as_slice()
                );
                self.pending_utf8.clear();
                self.decode_utf8(byte)
            }
            Err(_) => {
                tracing::warn!(
                    message = "Dropping invalid UTF-8 input",
                    bytes = ?self.pending_utf8.as_slice()
                );
                self.pending_utf8.clear();
                None
            }
        }
    }

    fn handle_backspace(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        if self.buffer.position() > 0 {
            self.buffer.remove();
            self.redraw(display)?;
        }
        ok!(ControlFlow::Continue(()))
    }

    fn handle_clear_line(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        self.buffer.clear();
        display.move_cursor_to(self.prompt_width)?;
        display.clear_line()?;
        ok!(ControlFlow::Continue(()))
    }

    fn handle_accept(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<ReadlineEvent, ReadlineError> {
        display.write_text("\n")?;
        let line = self.buffer.data();
        self.commit(&line)?;
        display.move_cursor_to(0)?;
        tracing::debug!(message = "Line accepted", line = %line);
        Ok(ReadlineEvent::Line(line))
    }

    /// Store `line` in history, and in the history file if it was stored.
    fn commit(&mut self, line: &str) -> Result<(), ReadlineError> {
        if self.history.add_line(line) {
            if let Some(history_file) = &self.history_file {
                history_file.append(line)?;
            }
        }
        self.history.reset_position();
        ok!()
    }

    fn handle_end_of_input(&mut self) -> SessionControl {
        if self.buffer.is_empty() {
            tracing::debug!(message = "End of input");
            return ControlFlow::Break(ReadlineEvent::Eof);
        }
        ControlFlow::Continue(())
    }

    fn handle_move_left(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        if let Some(ch) = self.buffer.char_before_cursor() {
            self.buffer.move_left();
            display.move_by(-cell_count(ch))?;
        }
        ok!(ControlFlow::Continue(()))
    }

    fn handle_move_right(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        if let Some(ch) = self.buffer.char_at_cursor() {
            self.buffer.move_right();
            display.move_by(cell_count(ch))?;
        }
        ok!(ControlFlow::Continue(()))
    }

    fn handle_history(
        &mut self,
        display: &mut dyn DisplayPort,
        is_previous: bool,
    ) -> Result<SessionControl, ReadlineError> {
        if self.history.is_empty() {
            return ok!(ControlFlow::Continue(()));
        }
        let recalled = if is_previous {
            self.history.previous()
        } else {
            self.history.next()
        };
        self.buffer.reset(recalled);
        self.redraw(display)?;
        ok!(ControlFlow::Continue(()))
    }

    fn handle_complete(
        &mut self,
        display: &mut dyn DisplayPort,
        completion_hook: Option<&mut CompletionHook>,
    ) -> Result<SessionControl, ReadlineError> {
        let Some(completion_hook) = completion_hook else {
            return ok!(ControlFlow::Continue(()));
        };
        let completed = completion_hook(&self.buffer.data());
        self.buffer.reset(&completed);
        self.redraw(display)?;
        ok!(ControlFlow::Continue(()))
    }

    fn handle_clear_screen(
        &mut self,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        display.clear_screen()?;
        display.move_cursor_to(0)?;
        display.write_text(&self.prompt)?;
        display.write_text(&self.buffer.data())?;
        self.reposition_cursor(display)
    }

    /// Rewrite the whole line after the prompt and put the cursor back.
    fn redraw(&self, display: &mut dyn DisplayPort) -> Result<(), ReadlineError> {
        display.move_cursor_to(self.prompt_width)?;
        display.clear_line()?;
        display.write_text(&self.buffer.data())?;
        display.move_cursor_to(self.cursor_column())
    }

    fn reposition_cursor(
        &self,
        display: &mut dyn DisplayPort,
    ) -> Result<SessionControl, ReadlineError> {
        display.move_cursor_to(self.cursor_column())?;
        ok!(ControlFlow::Continue(()))
    }

    fn cursor_column(&self) -> usize { self.prompt_width + self.buffer.width_before_cursor() }
}

/// Terminal columns `ch` occupies, as a cursor offset.
fn cell_count(ch: char) -> isize {
    match ch.width() {
        Some(2) => 2,
        Some(0) | None => 0,
        _ => 1,
    }
}
