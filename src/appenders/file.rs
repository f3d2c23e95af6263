//! File appender implementation

use crate::core::{Appender, LogLine, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-mode log file
///
/// Each line is handed to the OS in a single `write_all`, unbuffered, so
/// nothing is lost if the process exits right after a write.
#[derive(Debug)]
pub struct FileAppender {
    path: PathBuf,
    file: File,
}

impl FileAppender {
    /// Open `path` for appending, creating it if absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.file.write_all(bytes)
    }

    /// Push written data down to the storage device
    pub fn sync(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all().map_err(|e| {
            LoggerError::io_operation(
                "syncing log file",
                format!("cannot sync '{}'", self.path.display()),
                e,
            )
        })
    }
}

impl Appender for FileAppender {
    fn append(&mut self, line: &LogLine<'_>) -> io::Result<()> {
        self.write_bytes(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn name(&self) -> &str {
        "file"
    }
}
