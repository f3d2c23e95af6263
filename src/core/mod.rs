//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod rotation;
pub mod settings;
pub mod sink;
pub mod timestamp;

pub use appender::{shared, Appender, SharedAppender};
pub use error::{LoggerError, Result};
pub use log_entry::LogLine;
pub use log_level::LogLevel;
pub use logger::{
    ErrorLogger, LevelLogger, LoggerContext, LoggerContextBuilder, FATAL_EXIT_CODE,
};
pub use metrics::LoggerMetrics;
pub use rotation::{file_path, RotationState};
pub use settings::LoggerSettings;
pub use sink::LogSink;
pub use timestamp::{
    day_key, line_timestamp, Clock, LogTimezone, ManualClock, SystemClock,
    DEFAULT_TIMEZONE_NAME,
};
