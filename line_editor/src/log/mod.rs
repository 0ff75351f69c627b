// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup. The editor itself only emits `tracing` events, this module is for
//! binaries that want to see them. While a line is being edited the terminal belongs
//! to the editor, so logging to a file is usually the right choice.

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
