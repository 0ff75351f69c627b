// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fakes for the ports [`crate::Readline`] talks to, used by the tests in this crate.

// Attach.
pub mod short_writer;
pub mod stdout_mock;
pub mod temp_dir;
pub mod terminal_mock;

// Re-export.
pub use short_writer::*;
pub use stdout_mock::*;
pub use temp_dir::*;
pub use terminal_mock::*;
