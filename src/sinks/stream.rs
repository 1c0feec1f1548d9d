//! Stream sink writing to any owned writer

use crate::core::{Layout, LayoutHandle, Level, LoggerError, Record, Result, Sink, TextLayout};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Stateless sink appending one rendered line per record to a stream.
///
/// The writer sits behind a mutex so concurrent emits through shared
/// loggers never interleave partial lines.
pub struct StreamSink {
    name: String,
    layout: LayoutHandle,
    min_level: Option<Level>,
    target: Mutex<Box<dyn Write + Send>>,
}

impl StreamSink {
    pub fn new(name: impl Into<String>, target: Box<dyn Write + Send>) -> Self {
        Self {
            name: name.into(),
            layout: Arc::new(TextLayout::default()),
            min_level: None,
            target: Mutex::new(target),
        }
    }

    /// Sink writing to standard error, the conventional default.
    pub fn stderr() -> Self {
        Self::new("stderr", Box::new(io::stderr()))
    }

    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new("stdout", Box::new(io::stdout()))
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutHandle) -> Self {
        self.layout = layout;
        self
    }

    /// Drop records below `level` at this sink only, independent of the
    /// logger thresholds and filters that gate the whole dispatch.
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }
}

impl Sink for StreamSink {
    fn write(&self, record: &Record) -> Result<()> {
        if self.min_level.is_some_and(|min| record.level < min) {
            return Ok(());
        }
        let line = self.layout.render(record);
        let mut target = self.target.lock();
        target
            .write_all(line.as_bytes())
            .and_then(|()| target.write_all(b"\n"))
            .and_then(|()| target.flush())
            .map_err(|e| LoggerError::sink_write(&self.name, e.to_string()))
    }

    fn flush(&self) -> Result<()> {
        self.target
            .lock()
            .flush()
            .map_err(|e| LoggerError::sink_write(&self.name, e.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
