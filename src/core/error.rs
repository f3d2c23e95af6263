//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON settings could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Log file could not be opened for appending
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Timezone name is neither a known zone nor a fixed offset
    #[error("Failed to load timezone '{name}': {message}")]
    InvalidTimezone { name: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid timezone error
    pub fn invalid_timezone(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidTimezone {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_timezone("Mars/Olympus", "unknown zone");
        assert!(matches!(err, LoggerError::InvalidTimezone { .. }));

        let err = LoggerError::config("directory", "empty path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LoggerError::file_open("/var/log/2025-01-08.info.log", io_err);
        assert!(matches!(err, LoggerError::FileOpen { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_timezone("Invalid/Zone", "not a known zone");
        assert_eq!(
            err.to_string(),
            "Failed to load timezone 'Invalid/Zone': not a known zone"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::file_open("/root/x.log", io_err);
        assert_eq!(err.to_string(), "Failed to open log file '/root/x.log': denied");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("closing log file", "sync failed", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("closing log file"));
        assert!(err.to_string().contains("sync failed"));
    }
}
