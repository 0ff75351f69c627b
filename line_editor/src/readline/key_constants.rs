// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bytes that keypresses arrive as in raw mode.

#![cfg_attr(rustfmt, rustfmt_skip)]

/// The byte `Ctrl` + `key` sends: the low 5 bits of the key.
#[must_use]
pub const fn ctrl_key(key: u8) -> u8 { key & 0x1F }

pub const CTRL_A: u8 = ctrl_key(b'a');
pub const CTRL_C: u8 = ctrl_key(b'c');
pub const CTRL_D: u8 = ctrl_key(b'd');
pub const CTRL_E: u8 = ctrl_key(b'e');
/// `Ctrl+H`, sent as backspace by some terminals.
pub const CTRL_H: u8 = ctrl_key(b'h');
pub const CTRL_L: u8 = ctrl_key(b'l');
pub const CTRL_U: u8 = ctrl_key(b'u');

pub const TAB: u8 = b'\t';
pub const NEWLINE: u8 = b'\n';
/// What Enter sends once `ICRNL` input translation is off.
pub const CARRIAGE_RETURN: u8 = b'\r';
/// What the Backspace key sends on most terminals.
pub const DELETE: u8 = 0x7F;

pub const ANSI_ESC: u8 = 0x1B;
pub const ANSI_CSI_BRACKET: u8 = b'[';

// Final bytes of `ESC [ <final>` special key sequences.
pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';
pub const SPECIAL_END_FINAL: u8 = b'F';
pub const SPECIAL_HOME_FINAL: u8 = b'H';

pub const fn csi_key(final_byte: u8) -> [u8; 3] { [ANSI_ESC, ANSI_CSI_BRACKET, final_byte] }

pub const ARROW_UP: [u8; 3] = csi_key(ARROW_UP_FINAL);
pub const ARROW_DOWN: [u8; 3] = csi_key(ARROW_DOWN_FINAL);
pub const ARROW_RIGHT: [u8; 3] = csi_key(ARROW_RIGHT_FINAL);
pub const ARROW_LEFT: [u8; 3] = csi_key(ARROW_LEFT_FINAL);
pub const HOME: [u8; 3] = csi_key(SPECIAL_HOME_FINAL);
pub const END: [u8; 3] = csi_key(SPECIAL_END_FINAL);
