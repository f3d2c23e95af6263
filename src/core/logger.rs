//! Logging context and level facades
//!
//! A [`LoggerContext`] owns everything one logging setup needs: the
//! configure-once settings, the rotation controller, the four level
//! sinks, a clock and metrics. Hosts either build their own context and
//! pass it around, or use the process-wide default through the free
//! functions at the bottom of this module.

use super::{
    appender::{shared, Appender, SharedAppender},
    config::{prepare_directory, ConfigCell},
    error::{LoggerError, Result},
    log_entry::LogLine,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    rotation::RotationController,
    sink::LogSink,
    timestamp::{line_timestamp, Clock, LogTimezone, SystemClock},
};
use std::fmt::{self, Display, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Exit status used by every fatal path
pub const FATAL_EXIT_CODE: i32 = 1;

fn exit_fatal(message: impl Display) -> ! {
    eprintln!("[LOGGER FATAL] {}", message);
    std::process::exit(FATAL_EXIT_CODE)
}

pub struct LoggerContext {
    config: ConfigCell,
    rotation: RotationController,
    sinks: [LogSink; 4],
    clock: Arc<dyn Clock>,
    metrics: LoggerMetrics,
}

impl LoggerContext {
    /// Context on the wall clock with default settings
    ///
    /// No file is touched until the first write.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let context = Self {
            config: ConfigCell::new(),
            rotation: RotationController::new(),
            sinks: LogLevel::ALL.map(|level| LogSink::new(level, PathBuf::new())),
            clock,
            metrics: LoggerMetrics::new(),
        };

        let now = LogTimezone::default().from_utc(context.clock.now_utc());
        context
            .rotation
            .rotate(&now, Path::new(""), &context.sinks, &context.metrics);
        context
    }

    #[must_use]
    pub fn builder() -> LoggerContextBuilder {
        LoggerContextBuilder::new()
    }

    /// Set the log directory, creating it and its parents
    ///
    /// Only the first non-empty call before the first write has any
    /// effect. If the directory cannot be created a diagnostic goes to
    /// stderr and files keep landing in the working directory.
    pub fn set_directory(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return;
        }

        self.config.configure(|pending| {
            if let Some(directory) = pending.directory.set_once(|| prepare_directory(path)) {
                let now = pending.timezone.get().from_utc(self.clock.now_utc());
                self.rotation
                    .rotate(&now, directory, &self.sinks, &self.metrics);
            }
        });
    }

    /// Set the timezone by name
    ///
    /// Accepts IANA names, `UTC` and offsets such as `+08:00`. Only the
    /// first non-empty call before the first write has any effect.
    ///
    /// # Process termination
    ///
    /// An unknown name prints a diagnostic and exits the process with
    /// status 1. Use [`LogTimezone::from_str`](std::str::FromStr) and
    /// [`set_timezone_to`](Self::set_timezone_to) to validate first.
    pub fn set_timezone(&self, name: &str) {
        if name.is_empty() {
            return;
        }

        self.configure_timezone(|| match name.parse::<LogTimezone>() {
            Ok(timezone) => timezone,
            Err(e) => exit_fatal(e),
        });
    }

    /// Set an already resolved timezone (same one-shot rules)
    pub fn set_timezone_to(&self, timezone: LogTimezone) {
        self.configure_timezone(|| timezone);
    }

    fn configure_timezone(&self, resolve: impl FnOnce() -> LogTimezone) {
        self.config.configure(|pending| {
            if let Some(timezone) = pending.timezone.set_once(|| Some(resolve())) {
                let now = timezone.from_utc(self.clock.now_utc());
                self.rotation
                    .rotate(&now, pending.directory.get(), &self.sinks, &self.metrics);
            }
        });
    }

    /// Add destinations that receive every line before the file does
    ///
    /// The slice is copied; only the first non-empty call before the
    /// first write has any effect.
    pub fn append_sinks(&self, sinks: &[SharedAppender]) {
        if sinks.is_empty() {
            return;
        }

        self.config.configure(|pending| {
            pending.appenders.set_once(|| Some(Arc::from(sinks)));
        });
    }

    /// Whether a write already fixed the configuration
    pub fn is_frozen(&self) -> bool {
        self.config.is_frozen()
    }

    pub fn debug(&self) -> LevelLogger<'_> {
        self.logger(LogLevel::Debug)
    }

    pub fn info(&self) -> LevelLogger<'_> {
        self.logger(LogLevel::Info)
    }

    pub fn warning(&self) -> LevelLogger<'_> {
        self.logger(LogLevel::Warning)
    }

    pub fn error(&self) -> ErrorLogger<'_> {
        ErrorLogger {
            inner: self.logger(LogLevel::Error),
        }
    }

    pub fn logger(&self, level: LogLevel) -> LevelLogger<'_> {
        LevelLogger {
            context: self,
            level,
        }
    }

    /// Day key of the most recent rotation
    pub fn current_day_key(&self) -> String {
        self.rotation.snapshot().day_key
    }

    /// File the next write at `level` goes to
    pub fn file_path(&self, level: LogLevel) -> PathBuf {
        self.sink(level).path()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Close every open handle, returning the first failure
    pub fn close_all(&self) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.close(&self.metrics) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn sink(&self, level: LogLevel) -> &LogSink {
        &self.sinks[level.index()]
    }

    fn emit(&self, level: LogLevel, content: &str) {
        let config = self.config.freeze();

        let now = config.timezone.from_utc(self.clock.now_utc());
        self.rotation
            .check_and_rotate(&now, &config.directory, &self.sinks, &self.metrics);

        let timestamp = line_timestamp(&now);
        let line = LogLine::new(level, &timestamp, content);
        match self
            .sink(level)
            .write_line(&line, &config.appenders, &self.metrics)
        {
            Ok(()) => {}
            Err(e @ LoggerError::FileOpen { .. }) => exit_fatal(e),
            Err(e) => eprintln!("[LOGGER ERROR] {}", e),
        }
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerContext")
            .field("frozen", &self.is_frozen())
            .field("sinks", &self.sinks)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Handle writing to one level's sink
#[derive(Clone, Copy)]
pub struct LevelLogger<'a> {
    context: &'a LoggerContext,
    level: LogLevel,
}

impl<'a> LevelLogger<'a> {
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Write the values separated by spaces, then a newline
    ///
    /// The first write through any logger freezes the configuration.
    pub fn println(&self, values: &[&dyn Display]) {
        let mut content = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                content.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(content, "{}", value);
        }
        content.push('\n');
        self.context.emit(self.level, &content);
    }

    /// Write formatted text as is; no newline is added
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.context.emit(self.level, text),
            None => self.context.emit(self.level, &fmt::format(args)),
        }
    }

    /// Close this level's file handle
    pub fn close(&self) -> Result<()> {
        self.context.sink(self.level).close(&self.context.metrics)
    }

    pub fn path(&self) -> PathBuf {
        self.context.file_path(self.level)
    }
}

/// Error-level handle with terminating variants
#[derive(Clone, Copy)]
pub struct ErrorLogger<'a> {
    inner: LevelLogger<'a>,
}

impl<'a> ErrorLogger<'a> {
    pub fn println(&self, values: &[&dyn Display]) {
        self.inner.println(values);
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.inner.printf(args);
    }

    pub fn close(&self) -> Result<()> {
        self.inner.close()
    }

    pub fn path(&self) -> PathBuf {
        self.inner.path()
    }

    /// Like [`println`](Self::println), then exit the process with status 1
    ///
    /// The line is synced to disk before the process exits.
    pub fn fatalln(&self, values: &[&dyn Display]) -> ! {
        self.inner.println(values);
        self.exit()
    }

    /// Like [`printf`](Self::printf), then exit the process with status 1
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.inner.printf(args);
        self.exit()
    }

    fn exit(&self) -> ! {
        let context = self.inner.context;
        if let Err(e) = context.sink(LogLevel::Error).sync(&context.metrics) {
            eprintln!("[LOGGER ERROR] {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }
}

/// Builder for [`LoggerContext`]
///
/// # Example
///
/// ```no_run
/// use rust_daily_logger::{LogTimezone, LoggerContext};
/// use rust_daily_logger::appenders::ConsoleAppender;
///
/// let context = LoggerContext::builder()
///     .directory("/var/log/myapp")
///     .timezone("Europe/Berlin".parse::<LogTimezone>().unwrap())
///     .appender(ConsoleAppender::stdout())
///     .build();
///
/// context.info().println(&[&"service started"]);
/// ```
pub struct LoggerContextBuilder {
    directory: Option<PathBuf>,
    timezone: Option<LogTimezone>,
    appenders: Vec<SharedAppender>,
    clock: Option<Arc<dyn Clock>>,
}

impl LoggerContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: None,
            timezone: None,
            appenders: Vec::new(),
            clock: None,
        }
    }

    #[must_use]
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = Some(path.into());
        self
    }

    #[must_use]
    pub fn timezone(mut self, timezone: LogTimezone) -> Self {
        self.timezone = Some(timezone);
        self
    }

    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(shared(appender));
        self
    }

    /// Add an appender the caller keeps a handle to
    #[must_use]
    pub fn shared_appender(mut self, appender: SharedAppender) -> Self {
        self.appenders.push(appender);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> LoggerContext {
        let context = match self.clock {
            Some(clock) => LoggerContext::with_clock(clock),
            None => LoggerContext::new(),
        };

        if let Some(timezone) = self.timezone {
            context.set_timezone_to(timezone);
        }
        if let Some(directory) = self.directory {
            context.set_directory(directory);
        }
        context.append_sinks(&self.appenders);
        context
    }
}

impl Default for LoggerContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_CONTEXT: OnceLock<LoggerContext> = OnceLock::new();

/// Process-wide context behind the free functions
pub fn global() -> &'static LoggerContext {
    DEFAULT_CONTEXT.get_or_init(LoggerContext::new)
}

/// [`LoggerContext::set_directory`] on the process-wide context
pub fn set_directory(path: impl AsRef<Path>) {
    global().set_directory(path);
}

/// [`LoggerContext::set_timezone`] on the process-wide context
pub fn set_timezone(name: &str) {
    global().set_timezone(name);
}

/// [`LoggerContext::append_sinks`] on the process-wide context
pub fn append_sinks(sinks: &[SharedAppender]) {
    global().append_sinks(sinks);
}

pub fn debug() -> LevelLogger<'static> {
    global().debug()
}

pub fn info() -> LevelLogger<'static> {
    global().info()
}

pub fn warning() -> LevelLogger<'static> {
    global().warning()
}

pub fn error() -> ErrorLogger<'static> {
    global().error()
}

pub fn close_all() -> Result<()> {
    global().close_all()
}
