// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The read loop. [`Readline`] owns the ports and a [`LineSession`], and turns each
//! dispatched [`EditCommand`] into buffer, history, and display updates.

// Attach.
pub mod edit_command;
pub mod key_bindings;
pub mod key_constants;
pub mod line_session;
pub mod readline_impl;

// Re-export.
pub use edit_command::*;
pub use key_bindings::*;
pub use key_constants::*;
pub use line_session::*;
pub use readline_impl::*;
