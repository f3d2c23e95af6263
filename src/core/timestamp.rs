//! Clock and timezone provider
//!
//! Resolves "now" in the configured timezone and renders the two date
//! texts the logger needs: the day key used in file names and the
//! microsecond timestamp that starts every line.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Datelike, Duration, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use parking_lot::Mutex;
use std::fmt;
use std::str::FromStr;

/// Name of the default zone.
pub const DEFAULT_TIMEZONE_NAME: &str = "Asia/Shanghai";

const DEFAULT_OFFSET_SECS: i32 = 8 * 3600;

/// Timezone used for day keys and line timestamps
///
/// The default is a fixed UTC+8 offset named `Asia/Shanghai`, which
/// does not depend on a zone database being present on the host.
///
/// # Examples
///
/// ```
/// use rust_daily_logger::LogTimezone;
///
/// let tz: LogTimezone = "Europe/Paris".parse().unwrap();
/// assert_eq!(tz.name(), "Europe/Paris");
///
/// let fixed: LogTimezone = "+05:30".parse().unwrap();
/// assert_eq!(fixed.name(), "+05:30");
///
/// assert!("Invalid/Zone".parse::<LogTimezone>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LogTimezone {
    /// Constant offset from UTC
    Fixed { name: String, offset: FixedOffset },

    /// Zone from the IANA database, daylight saving included
    Named(Tz),
}

impl Default for LogTimezone {
    fn default() -> Self {
        LogTimezone::Fixed {
            name: DEFAULT_TIMEZONE_NAME.to_string(),
            offset: FixedOffset::east_opt(DEFAULT_OFFSET_SECS).unwrap_or_else(|| Utc.fix()),
        }
    }
}

impl LogTimezone {
    /// Create a fixed-offset timezone with a display name
    #[must_use]
    pub fn fixed(name: impl Into<String>, offset: FixedOffset) -> Self {
        LogTimezone::Fixed {
            name: name.into(),
            offset,
        }
    }

    /// Identifier this timezone was created from
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            LogTimezone::Fixed { name, .. } => name,
            LogTimezone::Named(tz) => tz.name(),
        }
    }

    /// Convert a UTC instant into this timezone
    #[must_use]
    pub fn from_utc(&self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            LogTimezone::Fixed { offset, .. } => utc.with_timezone(offset),
            LogTimezone::Named(tz) => utc.with_timezone(tz).fixed_offset(),
        }
    }
}

impl FromStr for LogTimezone {
    type Err = LoggerError;

    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoggerError::invalid_timezone(name, "empty timezone name"));
        }
        if name == DEFAULT_TIMEZONE_NAME {
            return Ok(LogTimezone::default());
        }
        if let Ok(tz) = name.parse::<Tz>() {
            return Ok(LogTimezone::Named(tz));
        }
        if let Ok(offset) = name.parse::<FixedOffset>() {
            return Ok(LogTimezone::fixed(name, offset));
        }
        Err(LoggerError::invalid_timezone(
            name,
            "not a known zone name or UTC offset",
        ))
    }
}

impl fmt::Display for LogTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// Lets a host or a test step over a day boundary without waiting for
/// midnight.
///
/// ```
/// use rust_daily_logger::{Clock, ManualClock};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 8, 15, 59, 0).unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance(Duration::minutes(2));
/// assert_eq!(clock.now_utc(), start + Duration::minutes(2));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// `YYYY-MM-DD` key of the day containing `datetime`
#[must_use]
pub fn day_key(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format("%Y-%m-%d").to_string()
}

/// Day count since the common era; same value for the same day key
#[must_use]
pub fn day_number(datetime: &DateTime<FixedOffset>) -> i32 {
    datetime.date_naive().num_days_from_ce()
}

/// `YYYY-MM-DD HH:MM:SS.ffffff` prefix of a log line
#[must_use]
pub fn line_timestamp(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
