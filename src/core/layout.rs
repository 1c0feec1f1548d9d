//! Layouts turn records into output strings
//!
//! Two reference layouts are provided: a separator-joined text layout and a
//! one-object-per-line JSON layout. Sinks take any [`Layout`], including
//! plain closures.

use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Timestamp rendering used by the text layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 with timezone offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format string
    Custom(String),
}

impl TimestampFormat {
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => timestamp.to_rfc3339(),
            TimestampFormat::UnixMillis => timestamp.timestamp_millis().to_string(),
            TimestampFormat::Custom(fmt) => timestamp.format(fmt).to_string(),
        }
    }
}

/// A formatting function from record to output string.
pub trait Layout: Send + Sync {
    fn render(&self, record: &Record) -> String;
}

/// Plain closures are layouts.
impl<F> Layout for F
where
    F: Fn(&Record) -> String + Send + Sync,
{
    fn render(&self, record: &Record) -> String {
        self(record)
    }
}

/// Shared handle to a layout, the form sinks store.
pub type LayoutHandle = Arc<dyn Layout>;

/// Separator-joined plain-text layout: time, logger path, level, message,
/// then `key=value` attribute pairs when present. Default separator is a
/// tab.
#[derive(Debug, Clone)]
pub struct TextLayout {
    separator: String,
    timestamp_format: TimestampFormat,
}

impl TextLayout {
    pub fn new() -> Self {
        Self {
            separator: "\t".to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for TextLayout {
    fn render(&self, record: &Record) -> String {
        let mut parts = vec![
            self.timestamp_format.format(&record.timestamp),
            record.logger_name.clone(),
            record.level.to_string(),
            record.message.clone(),
        ];
        if !record.attributes.is_empty() {
            parts.push(record.attributes.format_pairs());
        }
        parts.join(&self.separator)
    }
}

/// JSON layout: one object per line with `time`, `logger`, `level`,
/// `message`, and every attribute flattened in as its own key. An
/// attribute named like a standard field is written under `attr.<key>`
/// so the record's own fields always survive.
#[derive(Debug, Clone, Default)]
pub struct JsonLayout {
    timestamp_format: TimestampFormat,
}

impl JsonLayout {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Layout for JsonLayout {
    fn render(&self, record: &Record) -> String {
        let mut obj = serde_json::Map::new();

        let time_value = match self.timestamp_format {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(record.timestamp.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.timestamp_format.format(&record.timestamp)),
        };
        obj.insert("time".to_string(), time_value);
        obj.insert(
            "logger".to_string(),
            serde_json::Value::String(record.logger_name.clone()),
        );
        obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.as_str().to_string()),
        );
        obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        for (key, value) in record.attributes.iter() {
            let key = if obj.contains_key(key) {
                format!("attr.{}", key)
            } else {
                key.clone()
            };
            obj.insert(key, value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(obj)).unwrap_or_default()
    }
}
