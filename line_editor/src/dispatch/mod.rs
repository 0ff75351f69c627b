// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Longest-match routing of raw input bytes to actions.
//!
//! A keypress arrives as one byte (`Ctrl+U` is `0x15`) or as several (`Left` is
//! `ESC [ D`). Sequences share prefixes (`ESC` on its own may be bound too), so the
//! [`Dispatcher`] walks a [`KeyTrie`] byte by byte and fires the deepest action on the
//! path once the input stops matching. Bytes it read past that action go back into the
//! [`ByteSource`] and are dispatched again from the root.

// Attach.
pub mod byte_source;
pub mod dispatcher;
pub mod key_trie;

// Re-export.
pub use byte_source::*;
pub use dispatcher::*;
pub use key_trie::*;
