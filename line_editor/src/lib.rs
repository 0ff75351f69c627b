// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_editor
//!
//! A synchronous, single-line editor for raw terminals. It reads one line at a time from
//! a byte stream and gives the user an editable line with history recall, tab
//! completion, and a configurable prompt.
//!
//! The moving parts:
//!
//! 1. [`LineBuffer`] holds the characters typed so far and a cursor.
//! 2. [`Dispatcher`] maps byte sequences (single control bytes as well as multi-byte
//!    escape sequences like `ESC [ D`) to actions using longest-match lookup in a
//!    [`KeyTrie`]. Bytes read past the matched sequence are pushed back into the
//!    [`ByteSource`] so that nothing typed is lost.
//! 3. [`HistoryView`] is a bounded history of accepted lines plus a navigation cursor,
//!    optionally persisted with [`HistoryFile`].
//! 4. [`Readline`] ties these together. It puts the terminal into raw mode for the
//!    duration of [`Readline::read`] using a [`TerminalModeGuard`], dispatches
//!    [`EditCommand`]s, and redraws the line through a [`DisplayPort`].
//!
//! ```no_run
//! use r3bl_line_editor::{NoopTerminal, PushbackReader, Readline, ReadlineConfig,
//!                        ReadlineEvent};
//!
//! # fn main() -> miette::Result<()> {
//! let mut readline = Readline::try_new_with_writer(
//!     ReadlineConfig::default(),
//!     PushbackReader::new(std::io::stdin()),
//!     std::io::stdout(),
//!     NoopTerminal,
//! )?;
//! readline.set_prompter(|| "> ".to_string());
//!
//! while let ReadlineEvent::Line(line) = readline.read()? {
//!     println!("got: {line}");
//! }
//! # Ok(())
//! # }
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod buffer;
pub mod config;
pub mod decl_macros;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod log;
pub mod readline;
pub mod terminal;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use buffer::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use history::*;
pub use log::*;
pub use readline::*;
pub use terminal::*;
