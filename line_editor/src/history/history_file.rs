// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::{File, OpenOptions},
          io::{self, BufRead, BufReader, Write},
          path::{Path, PathBuf}};

/// Plain text history file, one entry per line, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    /// Append `line` followed by a newline, creating the file if needed.
    ///
    /// # Errors
    ///
    /// If the file can't be opened or written to.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Every line in the file, oldest first. A file that doesn't exist yet has no lines.
    ///
    /// # Errors
    ///
    /// If the file exists but can't be read, or isn't valid UTF-8.
    pub fn load(&self) -> io::Result<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(error) => return Err(error),
        };
        BufReader::new(file).lines().collect()
    }
}
