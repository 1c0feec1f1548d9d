//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed dotted logger name (empty segment, leading/trailing dot)
    #[error("invalid logger name '{name}': {reason}")]
    InvalidLoggerName { name: String, reason: String },

    /// Rotating sink path template that chrono cannot format
    #[error("invalid path template '{template}': {reason}")]
    InvalidPathTemplate { template: String, reason: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Write failure inside a sink, scoped to one delivery attempt
    #[error("sink '{sink}' failed to write: {message}")]
    SinkWrite { sink: String, message: String },

    /// File rotation failure with target path
    #[error("rotation failed for '{path}': {message}")]
    Rotation { path: String, message: String },
}

impl LoggerError {
    /// Create an invalid logger name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::InvalidLoggerName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid path template error
    pub fn invalid_template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::InvalidPathTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

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

    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a rotation error
    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error belongs to the configuration class (raised
    /// immediately at setup) rather than the sink-delivery class.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLoggerName { .. } | LoggerError::InvalidPathTemplate { .. }
        )
    }
}
