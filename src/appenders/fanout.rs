//! Fan-out over the extra appenders and the level's log file

use super::file::FileAppender;
use crate::core::{LogLine, LoggerMetrics, Result, SharedAppender};
use std::io;
use std::sync::Arc;

/// Writes each line to every extra appender, then to the file
///
/// A failing appender is reported on stderr and skipped; the file write
/// result is what the caller sees.
pub struct FanoutWriter {
    appenders: Arc<[SharedAppender]>,
    file: FileAppender,
}

impl FanoutWriter {
    pub fn new(appenders: Arc<[SharedAppender]>, file: FileAppender) -> Self {
        Self { appenders, file }
    }

    pub fn file(&self) -> &FileAppender {
        &self.file
    }

    pub fn write_line(&mut self, line: &LogLine<'_>, metrics: &LoggerMetrics) -> io::Result<()> {
        for (idx, appender) in self.appenders.iter().enumerate() {
            let mut appender = appender.lock();
            if let Err(e) = appender.append(line) {
                metrics.record_appender_failure();
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                    idx,
                    appender.name(),
                    e
                );
            }
        }

        self.file.write_bytes(line.as_bytes())
    }

    /// Flush the appenders and sync the file
    pub fn sync(&mut self, metrics: &LoggerMetrics) -> Result<()> {
        for (idx, appender) in self.appenders.iter().enumerate() {
            let mut appender = appender.lock();
            if let Err(e) = appender.flush() {
                metrics.record_appender_failure();
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) flush failed: {}",
                    idx,
                    appender.name(),
                    e
                );
            }
        }

        self.file.sync()
    }
}
