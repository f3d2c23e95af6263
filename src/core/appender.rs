//! Appender trait for extra log output destinations

use super::log_entry::LogLine;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Destination that receives every line next to the log file
///
/// One appender is shared by all four level sinks, so it is always
/// reached through a [`SharedAppender`].
pub trait Appender: Send {
    fn append(&mut self, line: &LogLine<'_>) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    fn name(&self) -> &str;
}

/// Appender handle shared across sinks
pub type SharedAppender = Arc<Mutex<dyn Appender>>;

/// Wrap an appender so it can be passed to `append_sinks`
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(appender))
}
