//! Adapter turning any `io::Write` into an appender

use crate::core::{Appender, LogLine};
use std::io::{self, Write};

/// Forwards rendered lines to an arbitrary writer
///
/// # Examples
///
/// ```
/// use rust_daily_logger::appenders::WriterAppender;
/// use rust_daily_logger::{Appender, LogLevel, LogLine};
///
/// let mut appender = WriterAppender::new(Vec::new());
/// let line = LogLine::new(LogLevel::Info, "2025-01-08 10:30:45.000000", "ok\n");
/// appender.append(&line).unwrap();
/// assert_eq!(appender.get_ref().as_slice(), line.as_bytes());
/// ```
#[derive(Debug)]
pub struct WriterAppender<W> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &LogLine<'_>) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
