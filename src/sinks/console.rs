//! Console sink with colored levels

use crate::core::{Level, Record, Result, Sink, TimestampFormat};
use colored::Colorize;
use std::io::Write;

/// Human-oriented console output. Error records go to stderr, everything
/// else to stdout. The standard streams carry their own locks, so no extra
/// serialization is needed here.
pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn format_line(&self, record: &Record) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", record.level.as_str())
                .color(record.level.color_code())
                .to_string()
        } else {
            format!("{:5}", record.level.as_str())
        };

        let mut line = format!(
            "[{}] [{}] {} - {}",
            self.timestamp_format.format(&record.timestamp),
            level_str,
            record.logger_name,
            record.message
        );

        if !record.attributes.is_empty() {
            line.push(' ');
            line.push_str(&record.attributes.format_pairs());
        }

        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &Record) -> Result<()> {
        let line = self.format_line(record);
        match record.level {
            Level::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // Both streams receive writes depending on level
        std::io::stdout()
            .flush()
            .map_err(|e| crate::core::LoggerError::sink_write("console", e.to_string()))?;
        std::io::stderr()
            .flush()
            .map_err(|e| crate::core::LoggerError::sink_write("console", e.to_string()))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Attributes;

    #[test]
    fn test_format_line_without_colors() {
        let sink = ConsoleSink::with_colors(false);
        let record = Record::new("app.ui", Level::Warn, "slow frame")
            .with_attributes(Attributes::new().with("frame_ms", 48));

        let line = sink.format_line(&record);
        assert!(line.contains("[WARN "));
        assert!(line.contains("app.ui - slow frame"));
        assert!(line.ends_with("frame_ms=48"));
    }

    #[test]
    fn test_write_never_fails() {
        let sink = ConsoleSink::with_colors(false);
        assert!(sink.write(&Record::new("a", Level::Info, "ok")).is_ok());
        assert!(sink.write(&Record::new("a", Level::Error, "bad")).is_ok());
    }
}
