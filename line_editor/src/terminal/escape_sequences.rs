// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) output sequences used to redraw the line.
//!
//! All of them start with `ESC [`, then take optional numeric parameters, then end with
//! a final byte that picks the operation. Eg: `ESC [ 5 G` moves the cursor to column 5.

#![cfg_attr(rustfmt, rustfmt_skip)]

pub const CSI_START: &str = "\x1b[";

/// Cursor Horizontal Absolute: move to column `n`, 1-based.
pub const CHA_CURSOR_COLUMN: char = 'G';
/// Cursor Forward: move right `n` columns.
pub const CUF_CURSOR_FORWARD: char = 'C';
/// Cursor Backward: move left `n` columns.
pub const CUB_CURSOR_BACKWARD: char = 'D';
/// Cursor Position: with no parameters, move to row 1 column 1.
pub const CUP_CURSOR_POSITION: char = 'H';
/// Erase in Line: with no parameter, from the cursor to the end of the line.
pub const EL_ERASE_LINE: char = 'K';
/// Erase in Display.
pub const ED_ERASE_DISPLAY: char = 'J';
/// Parameter for [`ED_ERASE_DISPLAY`] that clears the entire screen.
pub const ED_ERASE_ALL: u16 = 2;

/// Stands for the numeric argument in the templates of [`EscapeSequences`].
pub const COUNT_PLACEHOLDER: &str = "{N}";

/// The byte strings [`crate::AnsiDisplay`] writes for each control primitive.
///
/// Templates that take an argument contain [`COUNT_PLACEHOLDER`], which is replaced by a
/// decimal number when rendered. Configured once and never modified while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeSequences {
    pub clear_screen: String,
    /// Clear from the cursor to the end of the line.
    pub clear_line: String,
    /// Absolute column, `{N}` is 1-based.
    pub move_to_column: String,
    pub move_forward: String,
    pub move_backward: String,
}

impl EscapeSequences {
    /// Standard ANSI / VT100 sequences.
    #[must_use]
    pub fn ansi() -> Self {
        Self {
            clear_screen: format!(
                "{CSI_START}{ED_ERASE_ALL}{ED_ERASE_DISPLAY}{CSI_START}{CUP_CURSOR_POSITION}"
            ),
            clear_line: format!("{CSI_START}{EL_ERASE_LINE}"),
            move_to_column: format!("{CSI_START}{COUNT_PLACEHOLDER}{CHA_CURSOR_COLUMN}"),
            move_forward: format!("{CSI_START}{COUNT_PLACEHOLDER}{CUF_CURSOR_FORWARD}"),
            move_backward: format!("{CSI_START}{COUNT_PLACEHOLDER}{CUB_CURSOR_BACKWARD}"),
        }
    }

    /// Substitute `count` into `template`.
    #[must_use]
    pub fn render(template: &str, count: usize) -> String {
        template.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

impl Default for EscapeSequences {
    fn default() -> Self { Self::ansi() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_ansi_sequences() {
        let sequences = EscapeSequences::ansi();
        assert_eq2!(sequences.clear_screen, "\x1b[2J\x1b[H");
        assert_eq2!(sequences.clear_line, "\x1b[K");
        assert_eq2!(EscapeSequences::render(&sequences.move_to_column, 7), "\x1b[7G");
        assert_eq2!(EscapeSequences::render(&sequences.move_forward, 12), "\x1b[12C");
        assert_eq2!(EscapeSequences::render(&sequences.move_backward, 1), "\x1b[1D");
    }

    #[test]
    fn test_render_without_placeholder_is_verbatim() {
        assert_eq2!(EscapeSequences::render("\x1b[K", 3), "\x1b[K");
    }
}
