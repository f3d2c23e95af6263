//! Logging macros for ergonomic log message formatting.
//!
//! `logln!` and `logf!` work on any level handle; the level shorthands
//! take a [`LoggerContext`](crate::LoggerContext) and always end the line
//! with a newline.
//!
//! # Examples
//!
//! ```no_run
//! use rust_daily_logger::{info, logf, logln, LoggerContext};
//!
//! let context = LoggerContext::new();
//!
//! // Space-joined values plus newline
//! logln!(context.info(), "listening on", 8080);
//!
//! // Formatted, caller supplies the newline
//! logf!(context.warning(), "retry {} of {}\n", 3, 5);
//!
//! // Formatted line at a level
//! info!(context, "user {} logged in", 42);
//! ```

/// Write values separated by spaces, then a newline.
///
/// ```no_run
/// # use rust_daily_logger::{logln, LoggerContext};
/// # let context = LoggerContext::new();
/// logln!(context.debug(), "cache size", 128, "entries");
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.println(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Write formatted text without adding a newline.
///
/// ```no_run
/// # use rust_daily_logger::{logf, LoggerContext};
/// # let context = LoggerContext::new();
/// logf!(context.info(), "x={}\n", 1);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(format_args!($($arg)+))
    };
}

/// Write a formatted debug line.
#[macro_export]
macro_rules! debug {
    ($context:expr, $($arg:tt)+) => {
        $context
            .debug()
            .println(&[&format_args!($($arg)+) as &dyn ::std::fmt::Display])
    };
}

/// Write a formatted info line.
#[macro_export]
macro_rules! info {
    ($context:expr, $($arg:tt)+) => {
        $context
            .info()
            .println(&[&format_args!($($arg)+) as &dyn ::std::fmt::Display])
    };
}

/// Write a formatted warning line.
#[macro_export]
macro_rules! warning {
    ($context:expr, $($arg:tt)+) => {
        $context
            .warning()
            .println(&[&format_args!($($arg)+) as &dyn ::std::fmt::Display])
    };
}

/// Write a formatted error line.
#[macro_export]
macro_rules! error {
    ($context:expr, $($arg:tt)+) => {
        $context
            .error()
            .println(&[&format_args!($($arg)+) as &dyn ::std::fmt::Display])
    };
}

/// Write a formatted error line, then exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($context:expr, $($arg:tt)+) => {
        $context
            .error()
            .fatalln(&[&format_args!($($arg)+) as &dyn ::std::fmt::Display])
    };
}
