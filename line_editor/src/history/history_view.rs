// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{History, HistoryPolicy};

/// [`History`] plus a navigation cursor for Up / Down recall.
///
/// The cursor ranges over `0..=len()`. `len()` is the "fresh line" position below the
/// newest entry, where the cursor goes whenever a line is committed.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    history: History,
    cursor: usize,
}

impl HistoryView {
    #[must_use]
    pub fn new(max_size: usize, policy: HistoryPolicy) -> Self {
        Self {
            history: History::new(max_size, policy),
            cursor: 0,
        }
    }

    /// Store `line` and, if it was stored, move the cursor to the fresh line position.
    pub fn add_line(&mut self, line: &str) -> bool {
        let is_added = self.history.add_line(line);
        if is_added {
            self.cursor = self.history.len();
        }
        is_added
    }

    /// Step to the next older entry and return it. Stays on the oldest entry once there.
    /// Returns `""` when there is no history.
    pub fn previous(&mut self) -> &str {
        if self.history.is_empty() {
            return "";
        }
        self.cursor = self.cursor.saturating_sub(1).min(self.history.len() - 1);
        self.history.get(self.cursor).unwrap_or_default()
    }

    /// Step to the next newer entry and return it. Past the newest entry this returns
    /// `""`, the fresh line, and stays there.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &str {
        if self.cursor < self.history.len() {
            self.cursor += 1;
        }
        self.history.get(self.cursor).unwrap_or_default()
    }

    pub fn reset_position(&mut self) { self.cursor = self.history.len(); }

    #[must_use]
    pub fn position(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.history.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.history.is_empty() }

    pub fn entries(&self) -> impl Iterator<Item = &str> { self.history.iter() }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }
}
