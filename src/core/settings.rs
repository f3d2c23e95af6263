//! Startup settings loadable from JSON
//!
//! A host that keeps its logging setup in a config file can deserialize
//! it into [`LoggerSettings`] and apply it. Applying goes through the same
//! one-shot setters as direct calls, so the same freeze rules hold.

use super::appender::shared;
use super::error::{LoggerError, Result};
use super::logger::LoggerContext;
use super::timestamp::LogTimezone;
use crate::appenders::{ConsoleAppender, ConsoleTarget};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// # Examples
///
/// ```
/// use rust_daily_logger::LoggerSettings;
///
/// let settings = LoggerSettings::from_json(
///     r#"{ "directory": "logs", "timezone": "UTC", "console": "stdout" }"#,
/// ).unwrap();
/// assert_eq!(settings.timezone.as_deref(), Some("UTC"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    /// Directory the daily files are written to
    pub directory: Option<PathBuf>,
    /// Zone name or UTC offset used for day keys and timestamps
    pub timezone: Option<String>,
    /// Mirror every line to a standard stream
    pub console: Option<ConsoleTarget>,
    /// Highlight level labels on the console mirror
    pub colors: bool,
}

impl LoggerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the timezone without applying anything
    pub fn resolve_timezone(&self) -> Result<Option<LogTimezone>> {
        self.timezone
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .transpose()
    }

    /// Apply to a context that has not written yet
    ///
    /// An invalid timezone or an empty directory is returned as an error
    /// before any field is touched. Fields the context already fixed are
    /// left alone.
    pub fn apply(&self, context: &LoggerContext) -> Result<()> {
        let timezone = self.resolve_timezone()?;
        if matches!(&self.directory, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(LoggerError::config("directory", "empty path"));
        }

        if let Some(timezone) = timezone {
            context.set_timezone_to(timezone);
        }
        if let Some(directory) = &self.directory {
            context.set_directory(directory);
        }
        if let Some(target) = self.console {
            let console = match target {
                ConsoleTarget::Stdout => ConsoleAppender::stdout(),
                ConsoleTarget::Stderr => ConsoleAppender::stderr(),
            };
            context.append_sinks(&[shared(console.with_colors(self.colors))]);
        }
        Ok(())
    }
}
