// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};
use unicode_width::UnicodeWidthChar;

/// The characters of the line being edited, plus a cursor.
///
/// The cursor is an insertion point, it sits *between* characters. It is always in the
/// range `0..=len()`. Every operation here keeps it there: moves past either end are
/// silent no-ops.
///
/// Each [`char`] is one editing unit. Grapheme clusters made of several code points are
/// edited one code point at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    content: Vec<char>,
    cursor: usize,
    max_len: Option<usize>,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// When `max_len` is `Some`, [`Self::insert`] refuses to grow the line past it.
    #[must_use]
    pub fn with_max_len(max_len: Option<usize>) -> Self {
        Self {
            max_len,
            ..Default::default()
        }
    }

    /// Insert `ch` at the cursor, shifting whatever follows to the right. The cursor
    /// ends up after the inserted character.
    ///
    /// Returns `false`, and leaves the buffer untouched, if the line is already at its
    /// maximum length.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor (backspace). No-op at position 0.
    pub fn remove(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.content.remove(self.cursor);
    }

    pub fn move_left(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) { self.cursor = 0; }

    pub fn move_to_end(&mut self) { self.cursor = self.content.len(); }

    /// Replace the whole line (history recall, completion). The cursor goes to the end.
    /// Content beyond the maximum length is cut off.
    pub fn reset(&mut self, new_content: &str) {
        let limit = self.max_len.unwrap_or(usize::MAX);
        self.content = new_content.chars().take(limit).collect();
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub fn data(&self) -> String { self.content.iter().collect() }

    /// Everything from the cursor to the end of the line.
    #[must_use]
    pub fn chars_from_cursor(&self) -> String { self.content[self.cursor..].iter().collect() }

    #[must_use]
    pub fn position(&self) -> usize { self.cursor }

    #[must_use]
    pub fn char_before_cursor(&self) -> Option<char> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.content.get(index).copied())
    }

    #[must_use]
    pub fn char_at_cursor(&self) -> Option<char> { self.content.get(self.cursor).copied() }

    /// Terminal columns taken up by the characters before the cursor. Wide characters
    /// (eg: CJK) take two, combining marks take none.
    #[must_use]
    pub fn width_before_cursor(&self) -> usize {
        self.content[..self.cursor]
            .iter()
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    #[must_use]
    pub fn is_cursor_at_end(&self) -> bool { self.cursor == self.content.len() }

    #[must_use]
    pub fn max_len(&self) -> Option<usize> { self.max_len }

    fn is_full(&self) -> bool {
        self.max_len
            .is_some_and(|max_len| self.content.len() >= max_len)
    }
}

impl Display for LineBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for ch in &self.content {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
