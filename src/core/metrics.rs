//! Logger metrics for observability
//!
//! Counters for lines written, files opened, rotations and appender
//! failures. All counters are shared by the four level sinks of one
//! context.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_daily_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_line();
/// metrics.record_file_opened();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.files_opened(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines written to a log file
    lines_written: AtomicU64,

    /// Lazy opens of a log file handle
    files_opened: AtomicU64,

    /// Rotations that recomputed the per-level paths
    rotations: AtomicU64,

    /// Writes or flushes an extra appender rejected
    appender_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            files_opened: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            appender_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn files_opened(&self) -> u64 {
        self.files_opened.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appender_failures(&self) -> u64 {
        self.appender_failures.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_line(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_opened(&self) -> u64 {
        self.files_opened.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_appender_failure(&self) -> u64 {
        self.appender_failures.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            files_opened: AtomicU64::new(self.files_opened()),
            rotations: AtomicU64::new(self.rotations()),
            appender_failures: AtomicU64::new(self.appender_failures()),
        }
    }
}
