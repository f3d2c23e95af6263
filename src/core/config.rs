//! Configure-once settings cell
//!
//! Directory, timezone and extra appenders can each be set once, and
//! only until the first line is written. The first write publishes a
//! frozen snapshot that the write path reads without locking.
//!
//! Setters and the freeze transition take the same mutex, and setters
//! re-check the frozen flag after acquiring it, so a setter racing the
//! first write either lands before the snapshot or not at all.

use super::appender::SharedAppender;
use super::timestamp::LogTimezone;
use parking_lot::Mutex;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Unset,
    Set,
    Frozen,
}

/// One configurable value with its own one-shot latch
#[derive(Debug)]
pub(crate) struct Field<T> {
    value: T,
    state: FieldState,
}

impl<T> Field<T> {
    fn new(default: T) -> Self {
        Self {
            value: default,
            state: FieldState::Unset,
        }
    }

    pub(crate) fn get(&self) -> &T {
        &self.value
    }

    /// Fire the latch and store what `make` produces
    ///
    /// The latch fires even when `make` yields `None`; the default then
    /// stays in place and later calls are still ignored.
    pub(crate) fn set_once(&mut self, make: impl FnOnce() -> Option<T>) -> Option<&T> {
        if self.state != FieldState::Unset {
            return None;
        }
        self.state = FieldState::Set;
        self.value = make()?;
        Some(&self.value)
    }

    fn freeze(&mut self) {
        self.state = FieldState::Frozen;
    }
}

/// Settings that can still change
pub(crate) struct PendingConfig {
    pub(crate) directory: Field<PathBuf>,
    pub(crate) timezone: Field<LogTimezone>,
    pub(crate) appenders: Field<Arc<[SharedAppender]>>,
}

impl PendingConfig {
    fn new() -> Self {
        Self {
            directory: Field::new(PathBuf::new()),
            timezone: Field::new(LogTimezone::default()),
            appenders: Field::new(Arc::from(Vec::<SharedAppender>::new())),
        }
    }

    fn freeze(&mut self) -> FrozenConfig {
        self.directory.freeze();
        self.timezone.freeze();
        self.appenders.freeze();

        FrozenConfig {
            directory: self.directory.get().clone(),
            timezone: self.timezone.get().clone(),
            appenders: Arc::clone(self.appenders.get()),
        }
    }
}

/// Immutable settings published by the first write
#[derive(Clone)]
pub(crate) struct FrozenConfig {
    pub(crate) directory: PathBuf,
    pub(crate) timezone: LogTimezone,
    pub(crate) appenders: Arc<[SharedAppender]>,
}

pub(crate) struct ConfigCell {
    pending: Mutex<PendingConfig>,
    frozen: OnceLock<FrozenConfig>,
}

impl ConfigCell {
    pub(crate) fn new() -> Self {
        Self {
            pending: Mutex::new(PendingConfig::new()),
            frozen: OnceLock::new(),
        }
    }

    pub(crate) fn is_frozen(&self) -> bool {
        self.frozen.get().is_some()
    }

    /// Run `f` on the pending settings unless a write already froze them
    pub(crate) fn configure<R>(&self, f: impl FnOnce(&mut PendingConfig) -> R) -> Option<R> {
        if self.is_frozen() {
            return None;
        }

        let mut pending = self.pending.lock();
        if self.is_frozen() {
            return None;
        }
        Some(f(&mut pending))
    }

    /// Freeze on first call; every call returns the snapshot
    pub(crate) fn freeze(&self) -> &FrozenConfig {
        if let Some(frozen) = self.frozen.get() {
            return frozen;
        }

        let mut pending = self.pending.lock();
        self.frozen.get_or_init(|| pending.freeze())
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..`
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Normalize and create a log directory
///
/// Returns `None` after reporting on stderr when the directory cannot be
/// created; the caller keeps writing to the working directory.
pub(crate) fn prepare_directory(path: &Path) -> Option<PathBuf> {
    let cleaned = clean_path(path);
    match fs::create_dir_all(&cleaned) {
        Ok(()) => Some(cleaned),
        Err(e) => {
            eprintln!(
                "[LOGGER ERROR] Failed to create log directory '{}', falling back to the working directory: {}",
                cleaned.display(),
                e
            );
            None
        }
    }
}
