// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditCommand, EscapeSequences, HISTORY_SIZE_MAX, HistoryPolicy, KeyBindings};
use std::path::PathBuf;

/// Everything [`crate::Readline::try_new`] needs besides its ports.
///
/// ```
/// use r3bl_line_editor::{EditCommand, ReadlineConfig};
///
/// let config = ReadlineConfig::default()
///     .with_history_capacity(100)
///     .with_max_line_len(Some(80))
///     // Ctrl+X also accepts the line.
///     .bind(&[0x18], EditCommand::Accept);
/// assert_eq!(config.history_capacity, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadlineConfig {
    /// Oldest entries are dropped beyond this many.
    pub history_capacity: usize,
    pub history_policy: HistoryPolicy,
    /// Loaded when the editor is created, and appended to as lines are committed.
    pub history_file: Option<PathBuf>,
    /// Typing stops having an effect once the line has this many characters. `None`
    /// means no limit.
    pub max_line_len: Option<usize>,
    pub escape_sequences: EscapeSequences,
    pub key_bindings: KeyBindings,
}

impl Default for ReadlineConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_SIZE_MAX,
            history_policy: HistoryPolicy::default(),
            history_file: None,
            max_line_len: None,
            escape_sequences: EscapeSequences::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl ReadlineConfig {
    #[must_use]
    pub fn with_history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    #[must_use]
    pub fn with_history_policy(mut self, history_policy: HistoryPolicy) -> Self {
        self.history_policy = history_policy;
        self
    }

    #[must_use]
    pub fn with_history_file(mut self, history_file: Option<PathBuf>) -> Self {
        self.history_file = history_file;
        self
    }

    #[must_use]
    pub fn with_max_line_len(mut self, max_line_len: Option<usize>) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    #[must_use]
    pub fn with_escape_sequences(mut self, escape_sequences: EscapeSequences) -> Self {
        self.escape_sequences = escape_sequences;
        self
    }

    /// Add a binding on top of the current ones. It replaces any binding for the same
    /// sequence.
    #[must_use]
    pub fn bind(mut self, sequence: &[u8], command: EditCommand) -> Self {
        self.key_bindings.bind(sequence, command);
        self
    }

    #[must_use]
    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }
}
