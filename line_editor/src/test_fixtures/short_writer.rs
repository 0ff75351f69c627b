// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

/// Writer that accepts at most `max_bytes_per_write` bytes per call, like a pipe that is
/// almost full.
#[derive(Debug, Clone)]
pub struct ShortWriter {
    pub max_bytes_per_write: usize,
    pub written: Vec<u8>,
}

impl ShortWriter {
    #[must_use]
    pub fn new(max_bytes_per_write: usize) -> Self {
        Self {
            max_bytes_per_write,
            written: vec![],
        }
    }
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let count = buf.len().min(self.max_bytes_per_write);
        self.written.extend_from_slice(&buf[..count]);
        Ok(count)
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
