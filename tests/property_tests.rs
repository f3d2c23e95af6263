//! Property-based tests for rust_daily_logger using proptest

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_daily_logger::prelude::*;
use rust_daily_logger::{day_key, file_path, line_timestamp};
use std::path::{Path, PathBuf};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
    ]
}

fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 2000-01-01 .. 2100-01-01, microsecond resolution
    (946_684_800i64..4_102_444_800i64, 0u32..1_000_000u32).prop_map(|(secs, micros)| {
        Utc.timestamp_opt(secs, micros * 1000)
            .single()
            .expect("in range")
    })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Labels parse back into the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        let parsed: LogLevel = level.file_name().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(level.to_string(), level.to_str());
    }
}

// ============================================================================
// File Naming Tests
// ============================================================================

proptest! {
    /// Paths are `<dir>/<day>.<level>.log` for any directory and day
    #[test]
    fn test_file_path_shape(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        instant in any_instant(),
        level in any_level(),
    ) {
        let local = LogTimezone::default().from_utc(instant);
        let day = day_key(&local);
        let path = file_path(Path::new(&dir), &day, level);

        prop_assert_eq!(path.parent(), Some(Path::new(&dir)));
        prop_assert_eq!(
            path.file_name().and_then(|n| n.to_str()).map(str::to_string),
            Some(format!("{}.{}.log", day, level.file_name()))
        );
        prop_assert_eq!(path.clone(), file_path(Path::new(&dir), &day, level));
    }

    /// An empty directory yields a bare file name
    #[test]
    fn test_file_path_empty_directory(instant in any_instant(), level in any_level()) {
        let local = LogTimezone::default().from_utc(instant);
        let day = day_key(&local);
        prop_assert_eq!(
            file_path(Path::new(""), &day, level),
            PathBuf::from(format!("{}.{}.log", day, level.file_name()))
        );
    }
}

// ============================================================================
// Timestamp Tests
// ============================================================================

proptest! {
    /// Line timestamps have microsecond precision and start with the day key
    #[test]
    fn test_line_timestamp_shape(instant in any_instant(), offset_hours in -12i32..=14) {
        let name = format!("{:+03}:00", offset_hours);
        let tz: LogTimezone = name.parse().unwrap();
        let local = tz.from_utc(instant);
        let stamp = line_timestamp(&local);

        prop_assert_eq!(stamp.len(), 26);
        prop_assert!(stamp.starts_with(&day_key(&local)));
        prop_assert_eq!(&stamp[10..11], " ");
        prop_assert_eq!(&stamp[19..20], ".");
        prop_assert!(stamp[20..].chars().all(|c| c.is_ascii_digit()));
    }

    /// Rendered lines are `<timestamp> <LEVEL> <content>`
    #[test]
    fn test_log_line_layout(level in any_level(), content in "[ -~]{0,64}\n?") {
        let line = LogLine::new(level, "2025-01-08 10:30:45.123456", &content);
        let expected = format!("2025-01-08 10:30:45.123456 {} {}", level.to_str(), content);
        prop_assert_eq!(line.as_str(), expected.as_str());
    }
}
