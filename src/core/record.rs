//! Log record structure

use super::attributes::Attributes;
use super::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One emitted log event.
///
/// Constructed exactly once per emit call and never mutated afterwards;
/// every sink sees the same record.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Dotted path of the logger that emitted this record
    pub logger_name: String,
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Record {
    /// Sanitize a message to prevent log injection.
    ///
    /// Newlines, carriage returns, and tabs become escape sequences so a
    /// message can never masquerade as additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger_name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            logger_name: logger_name.into(),
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Override the timestamp, mainly for replay and testing
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
