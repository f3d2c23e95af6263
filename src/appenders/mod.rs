//! Appender implementations

pub mod console;
pub mod fanout;
pub mod file;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use fanout::FanoutWriter;
pub use file::FileAppender;
pub use writer::WriterAppender;

// Trait re-exported next to its implementations
pub use crate::core::Appender;
