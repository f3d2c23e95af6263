//! Rendered log line handed to every output destination

use super::log_level::LogLevel;

/// One fully formatted line
///
/// `rendered` is exactly what lands in the file:
/// `<timestamp> <LEVEL> <content>`. Appenders that want to decorate the
/// level (colors) can rebuild it from the parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub level: LogLevel,
    pub timestamp: &'a str,
    pub content: &'a str,
    rendered: String,
}

impl<'a> LogLine<'a> {
    pub fn new(level: LogLevel, timestamp: &'a str, content: &'a str) -> Self {
        let label = level.to_str();
        let mut rendered =
            String::with_capacity(timestamp.len() + label.len() + content.len() + 2);
        rendered.push_str(timestamp);
        rendered.push(' ');
        rendered.push_str(label);
        rendered.push(' ');
        rendered.push_str(content);

        Self {
            level,
            timestamp,
            content,
            rendered,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.rendered.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        let line = LogLine::new(LogLevel::Info, "2025-01-08 10:30:45.123456", "hello\n");
        assert_eq!(line.as_str(), "2025-01-08 10:30:45.123456 INFO hello\n");
        assert_eq!(line.content, "hello\n");
    }

    #[test]
    fn test_rendering_keeps_missing_newline() {
        let line = LogLine::new(LogLevel::Warning, "2025-01-08 10:30:45.000001", "x=1");
        assert_eq!(line.as_str(), "2025-01-08 10:30:45.000001 WARNING x=1");
    }
}
