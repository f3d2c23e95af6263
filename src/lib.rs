//! # Rust Daily Logger
//!
//! Leveled, file-based logging with automatic daily rotation.
//!
//! ## Features
//!
//! - **Daily Files**: `<dir>/<YYYY-MM-DD>.<level>.log` per level
//! - **Configure Once**: directory, timezone and extra appenders are fixed by the first write
//! - **Lazy Handles**: files are opened on first use and reopened after rotation
//! - **Thread Safe**: lock-free day check on the hot path, one lock per level
//!
//! ## Example
//!
//! ```no_run
//! use rust_daily_logger as logger;
//!
//! logger::set_directory("logs");
//! logger::set_timezone("Asia/Shanghai");
//!
//! logger::info().println(&[&"server started on port", &8080]);
//! logger::warning().printf(format_args!("disk at {}%\n", 91));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, WriterAppender};
    pub use crate::core::{
        shared, Appender, Clock, ErrorLogger, LevelLogger, LogLevel, LogLine, LogTimezone,
        LoggerContext, LoggerContextBuilder, LoggerError, LoggerMetrics, LoggerSettings,
        ManualClock, Result, SharedAppender, SystemClock,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, WriterAppender};
pub use crate::core::logger::{
    append_sinks, close_all, debug, error, global, info, set_directory, set_timezone, warning,
};
pub use crate::core::{
    day_key, file_path, line_timestamp, shared, Appender, Clock, ErrorLogger, LevelLogger,
    LogLevel, LogLine, LogSink, LogTimezone, LoggerContext, LoggerContextBuilder, LoggerError,
    LoggerMetrics, LoggerSettings, ManualClock, Result, RotationState, SharedAppender,
    SystemClock, DEFAULT_TIMEZONE_NAME, FATAL_EXIT_CODE,
};
