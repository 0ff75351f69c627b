// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EscapeSequences, ReadlineError, ok};
use std::io::Write;

/// Output primitives the editor draws the line with. Columns are 0-based.
pub trait DisplayPort {
    /// # Errors
    ///
    /// If the text could not be written in full.
    fn write_text(&mut self, text: &str) -> Result<(), ReadlineError>;

    /// Move the cursor to column `col` of the current row.
    ///
    /// # Errors
    ///
    /// If the sequence could not be written in full.
    fn move_cursor_to(&mut self, col: usize) -> Result<(), ReadlineError>;

    /// Move the cursor `delta` columns, right when positive, left when negative.
    ///
    /// # Errors
    ///
    /// If the sequence could not be written in full.
    fn move_by(&mut self, delta: isize) -> Result<(), ReadlineError>;

    /// Clear from the cursor to the end of the line.
    ///
    /// # Errors
    ///
    /// If the sequence could not be written in full.
    fn clear_line(&mut self) -> Result<(), ReadlineError>;

    /// Clear the whole screen and home the cursor.
    ///
    /// # Errors
    ///
    /// If the sequence could not be written in full.
    fn clear_screen(&mut self) -> Result<(), ReadlineError>;

    /// # Errors
    ///
    /// If the underlying writer fails to flush.
    fn flush(&mut self) -> Result<(), ReadlineError>;
}

/// [`DisplayPort`] that writes [`EscapeSequences`] to `W`.
///
/// Every primitive is issued as a single `write` call. A writer that accepts fewer bytes
/// than it was given fails with [`ReadlineError::PartialWrite`], the rest is not retried.
#[derive(Debug)]
pub struct AnsiDisplay<W> {
    writer: W,
    sequences: EscapeSequences,
}

impl<W: Write> AnsiDisplay<W> {
    pub fn new(writer: W) -> Self { Self::with_sequences(writer, EscapeSequences::ansi()) }

    pub fn with_sequences(writer: W, sequences: EscapeSequences) -> Self {
        Self { writer, sequences }
    }

    pub fn get_ref(&self) -> &W { &self.writer }

    pub fn into_inner(self) -> W { self.writer }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ReadlineError> {
        if bytes.is_empty() {
            return ok!();
        }
        let written = self.writer.write(bytes)?;
        if written != bytes.len() {
            return Err(ReadlineError::PartialWrite {
                expected: bytes.len(),
                written,
            });
        }
        ok!()
    }
}

impl<W: Write> DisplayPort for AnsiDisplay<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ReadlineError> {
        self.write_bytes(text.as_bytes())
    }

    fn move_cursor_to(&mut self, col: usize) -> Result<(), ReadlineError> {
        let sequence = EscapeSequences::render(&self.sequences.move_to_column, col + 1);
        self.write_bytes(sequence.as_bytes())
    }

    fn move_by(&mut self, delta: isize) -> Result<(), ReadlineError> {
        let template = match delta {
            0 => return ok!(),
            1.. => &self.sequences.move_forward,
            _ => &self.sequences.move_backward,
        };
        let sequence = EscapeSequences::render(template, delta.unsigned_abs());
        self.write_bytes(sequence.as_bytes())
    }

    fn clear_line(&mut self) -> Result<(), ReadlineError> {
        let sequence = self.sequences.clear_line.clone();
        self.write_bytes(sequence.as_bytes())
    }

    fn clear_screen(&mut self) -> Result<(), ReadlineError> {
        let sequence = self.sequences.clear_screen.clone();
        self.write_bytes(sequence.as_bytes())
    }

    fn flush(&mut self) -> Result<(), ReadlineError> {
        self.writer.flush()?;
        ok!()
    }
}
