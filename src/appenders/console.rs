//! Console appender implementation

use crate::core::{Appender, LogLine};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[cfg(feature = "console")]
use colored::Colorize;

/// Standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Mirrors every line to stdout or stderr
pub struct ConsoleAppender {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            use_colors: false,
        }
    }

    /// Highlight the level label (needs the `console` feature)
    ///
    /// # Example
    ///
    /// ```
    /// use rust_daily_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::stdout().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn format_line(&self, line: &LogLine<'_>) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return format!(
                "{} {} {}",
                line.timestamp,
                line.level.to_str().color(line.level.color_code()),
                line.content
            );
        }

        line.as_str().to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &LogLine<'_>) -> io::Result<()> {
        let output = self.format_line(line);
        match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(output.as_bytes()),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(output.as_bytes()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}
