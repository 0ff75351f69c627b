// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that touches the terminal.
//!
//! - Input side: [`TerminalPort`] switches the terminal into raw mode and back.
//!   [`TerminalModeGuard`] scopes that switch to one read session. On unix,
//!   [`TerminalSettings`] implements it with rustix's termios API.
//! - Output side: [`DisplayPort`] is the small set of primitives the editor redraws
//!   with. [`AnsiDisplay`] implements it over any [`std::io::Write`] using the
//!   [`EscapeSequences`] table.
//!
//! # Raw mode vs cooked mode
//!
//! In cooked (canonical) mode the terminal driver buffers a whole line, handles
//! backspace itself, and echoes what is typed. In raw mode every keypress is delivered
//! as soon as it happens, without echo, which is what a line editor needs to draw the
//! line itself.

// Attach.
pub mod display;
pub mod escape_sequences;
pub mod raw_mode_core;
#[cfg(unix)]
pub mod raw_mode_unix;

// Re-export.
pub use display::*;
pub use escape_sequences::*;
pub use raw_mode_core::*;
#[cfg(unix)]
pub use raw_mode_unix::*;
