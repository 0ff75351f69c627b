// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod history_file;
pub mod history_store;
pub mod history_view;

// Re-export.
pub use history_file::*;
pub use history_store::*;
pub use history_view::*;
