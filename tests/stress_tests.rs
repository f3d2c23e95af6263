//! Stress tests for concurrent writes
//!
//! These tests verify:
//! - Many threads writing the same level produce whole, non-interleaved lines
//! - Writes racing a day rotation land complete in one of the two files
//! - Different levels can be written concurrently

use chrono::{Duration, TimeZone, Utc};
use regex::Regex;
use rust_daily_logger::{LogLevel, LoggerContext, ManualClock};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 16;
const WRITES_PER_THREAD: usize = 500;

fn line_pattern(label: &str) -> Regex {
    Regex::new(&format!(
        r"^\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}}\.\d{{6}} {} t=(\d+) i=(\d+)$",
        label
    ))
    .unwrap()
}

fn collect_ids(path: &Path, pattern: &Regex, seen: &mut HashSet<(usize, usize)>) -> usize {
    let content = fs::read_to_string(path).unwrap_or_default();
    assert!(content.is_empty() || content.ends_with('\n'));

    let mut count = 0;
    for line in content.lines() {
        let caps = pattern
            .captures(line)
            .unwrap_or_else(|| panic!("corrupted line: {:?}", line));
        let id = (caps[1].parse().unwrap(), caps[2].parse().unwrap());
        assert!(seen.insert(id), "duplicate line {:?}", id);
        count += 1;
    }
    count
}

#[test]
fn test_concurrent_println_same_level() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let context = Arc::new(
        LoggerContext::builder()
            .directory(temp_dir.path())
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let context = Arc::clone(&context);
            thread::spawn(move || {
                for i in 0..WRITES_PER_THREAD {
                    context.info().println(&[&format!("t={}", t), &format!("i={}", i)]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }
    context.close_all().expect("close");

    let mut seen = HashSet::new();
    let count = collect_ids(
        &context.file_path(LogLevel::Info),
        &line_pattern("INFO"),
        &mut seen,
    );
    assert_eq!(count, THREADS * WRITES_PER_THREAD);
    assert_eq!(context.metrics().files_opened(), 1);
}

#[test]
fn test_concurrent_printf_across_levels() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let context = Arc::new(
        LoggerContext::builder()
            .directory(temp_dir.path())
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let context = Arc::clone(&context);
            thread::spawn(move || {
                let logger = context.logger(LogLevel::ALL[t % 4]);
                for i in 0..WRITES_PER_THREAD {
                    logger.printf(format_args!("t={} i={}\n", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let mut total = 0;
    for level in LogLevel::ALL {
        let mut seen = HashSet::new();
        total += collect_ids(
            &context.file_path(level),
            &line_pattern(level.to_str()),
            &mut seen,
        );
    }
    assert_eq!(total, THREADS * WRITES_PER_THREAD);
    assert_eq!(context.metrics().lines_written() as usize, total);
}

#[test]
fn test_writes_racing_midnight_rotation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // 23:59:59 in the default UTC+8 zone
    let start = Utc
        .with_ymd_and_hms(2025, 1, 8, 15, 59, 59)
        .single()
        .expect("valid datetime");
    let clock = Arc::new(ManualClock::new(start));
    let context = Arc::new(
        LoggerContext::builder()
            .clock(clock.clone())
            .directory(temp_dir.path())
            .build(),
    );
    let started = Arc::new(AtomicBool::new(false));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let context = Arc::clone(&context);
            let started = Arc::clone(&started);
            thread::spawn(move || {
                for i in 0..WRITES_PER_THREAD {
                    context.warning().println(&[&format!("t={}", t), &format!("i={}", i)]);
                    started.store(true, Ordering::Relaxed);
                }
            })
        })
        .collect();

    while !started.load(Ordering::Relaxed) {
        thread::yield_now();
    }
    clock.advance(Duration::seconds(2));

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }
    context.close_all().expect("close");

    let pattern = line_pattern("WARNING");
    let mut seen = HashSet::new();
    let old_day = collect_ids(
        &temp_dir.path().join("2025-01-08.warning.log"),
        &pattern,
        &mut seen,
    );
    let new_day = collect_ids(
        &temp_dir.path().join("2025-01-09.warning.log"),
        &pattern,
        &mut seen,
    );

    assert!(old_day > 0);
    assert_eq!(old_day + new_day, THREADS * WRITES_PER_THREAD);
    assert_eq!(context.current_day_key(), "2025-01-09");
}
