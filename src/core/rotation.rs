//! Daily rotation controller
//!
//! Every write asks whether the day changed. The answer comes from an
//! atomic day number read without locking; only when it differs does
//! the writer take the rotation lock, re-check under it, and recompute
//! the four per-level paths.
//!
//! Lock order is rotation lock, then sink lock. Sinks never call back
//! into the controller.

use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use super::sink::LogSink;
use super::timestamp::{day_key, day_number};
use chrono::{DateTime, FixedOffset};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI32, Ordering};

const UNSET_DAY: i32 = i32::MIN;

/// `<directory>/<day_key>.<level>.log`
///
/// ```
/// use rust_daily_logger::{file_path, LogLevel};
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     file_path(Path::new("logs"), "2025-01-08", LogLevel::Warning),
///     PathBuf::from("logs/2025-01-08.warning.log")
/// );
/// assert_eq!(
///     file_path(Path::new(""), "2025-01-08", LogLevel::Info),
///     PathBuf::from("2025-01-08.info.log")
/// );
/// ```
#[must_use]
pub fn file_path(directory: &Path, day_key: &str, level: LogLevel) -> PathBuf {
    directory.join(format!("{}.{}.log", day_key, level.file_name()))
}

/// Day key and paths as of the most recent rotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationState {
    pub day_key: String,
    pub paths: [PathBuf; 4],
}

pub(crate) struct RotationController {
    day_fast: AtomicI32,
    state: Mutex<RotationState>,
}

impl RotationController {
    pub(crate) fn new() -> Self {
        Self {
            day_fast: AtomicI32::new(UNSET_DAY),
            state: Mutex::new(RotationState::default()),
        }
    }

    pub(crate) fn snapshot(&self) -> RotationState {
        self.state.lock().clone()
    }

    /// Rotate if `now` falls on a different day than the last rotation
    pub(crate) fn check_and_rotate(
        &self,
        now: &DateTime<FixedOffset>,
        directory: &Path,
        sinks: &[LogSink; 4],
        metrics: &LoggerMetrics,
    ) {
        let day = day_number(now);
        if self.day_fast.load(Ordering::Acquire) == day {
            return;
        }

        let mut state = self.state.lock();
        let key = day_key(now);
        if state.day_key != key {
            self.rotate_locked(&mut state, key, day, directory, sinks, metrics);
        }
    }

    /// Recompute every path even when the day is unchanged
    ///
    /// Used when the directory or timezone changes.
    pub(crate) fn rotate(
        &self,
        now: &DateTime<FixedOffset>,
        directory: &Path,
        sinks: &[LogSink; 4],
        metrics: &LoggerMetrics,
    ) {
        let mut state = self.state.lock();
        self.rotate_locked(&mut state, day_key(now), day_number(now), directory, sinks, metrics);
    }

    fn rotate_locked(
        &self,
        state: &mut RotationState,
        key: String,
        day: i32,
        directory: &Path,
        sinks: &[LogSink; 4],
        metrics: &LoggerMetrics,
    ) {
        for level in LogLevel::ALL {
            let path = file_path(directory, &key, level);
            sinks[level.index()].set_path(path.clone());
            state.paths[level.index()] = path;
        }
        state.day_key = key;

        // Published last so a fast-path hit never sees stale sink paths.
        self.day_fast.store(day, Ordering::Release);
        metrics.record_rotation();
    }
}
