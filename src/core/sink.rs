//! Per-level log sink
//!
//! Owns one lazily opened file handle. The handle is opened on the first
//! write after construction, rotation or close, and always against the
//! path the sink holds at that moment.

use super::appender::SharedAppender;
use super::error::{LoggerError, Result};
use super::log_entry::LogLine;
use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use crate::appenders::{FanoutWriter, FileAppender};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

struct SinkState {
    path: PathBuf,
    writer: Option<FanoutWriter>,
}

pub struct LogSink {
    level: LogLevel,
    state: Mutex<SinkState>,
}

impl LogSink {
    pub(crate) fn new(level: LogLevel, path: PathBuf) -> Self {
        Self {
            level,
            state: Mutex::new(SinkState { path, writer: None }),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Path the next lazy open will use
    pub fn path(&self) -> PathBuf {
        self.state.lock().path.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().writer.is_some()
    }

    /// Point the sink at a new file, dropping the open handle if the path changed
    pub(crate) fn set_path(&self, path: PathBuf) -> bool {
        let mut state = self.state.lock();
        if state.path == path {
            return false;
        }
        state.writer = None;
        state.path = path;
        true
    }

    /// Write one rendered line, opening the file first if needed
    ///
    /// Returns `LoggerError::FileOpen` when the lazy open fails.
    pub(crate) fn write_line(
        &self,
        line: &LogLine<'_>,
        appenders: &Arc<[SharedAppender]>,
        metrics: &LoggerMetrics,
    ) -> Result<()> {
        let mut state = self.state.lock();
        if state.writer.is_none() {
            let file = FileAppender::open(state.path.as_path())?;
            metrics.record_file_opened();
            state.writer = Some(FanoutWriter::new(Arc::clone(appenders), file));
        }

        let SinkState { path, writer } = &mut *state;
        if let Some(writer) = writer.as_mut() {
            writer.write_line(line, metrics).map_err(|e| {
                LoggerError::io_operation(
                    "writing log line",
                    format!("cannot append to '{}'", path.display()),
                    e,
                )
            })?;
            metrics.record_line();
        }
        Ok(())
    }

    /// Flush appenders and sync the file without releasing the handle
    pub fn sync(&self, metrics: &LoggerMetrics) -> Result<()> {
        match self.state.lock().writer.as_mut() {
            Some(writer) => writer.sync(metrics),
            None => Ok(()),
        }
    }

    /// Release the handle; the next write reopens lazily
    ///
    /// No-op when nothing is open.
    pub fn close(&self, metrics: &LoggerMetrics) -> Result<()> {
        let writer = self.state.lock().writer.take();
        match writer {
            Some(mut writer) => writer.sync(metrics),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn opened_path(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .writer
            .as_ref()
            .map(|writer| writer.file().path().to_path_buf())
    }
}

impl std::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LogSink")
            .field("level", &self.level)
            .field("path", &state.path)
            .field("open", &state.writer.is_some())
            .finish()
    }
}
