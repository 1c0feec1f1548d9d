//! Time-rotating file sink driven by a strftime path template
//!
//! The sink owns one open file at a time. The rotation bucket (the "period
//! key") is simply the path template substituted with a record's timestamp:
//! a template of `logs/%Y/%m/app-%d.log` rotates daily because the
//! substituted path changes once per day. Setup is deferred until the first
//! write; rotation happens lazily on the first write whose key differs from
//! the current one.

use crate::core::{Layout, LayoutHandle, Level, LoggerError, Record, Result, Sink, TextLayout};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// When buffered output reaches the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushPolicy {
    /// Flush after every record (default): nothing buffered is lost short
    /// of a crash mid-write.
    #[default]
    EveryRecord,
    /// Leave flushing to the buffer, rotation, and drop. Faster, but
    /// recent records may be lost on crash.
    Buffered,
}

struct RotationState {
    /// Substituted template of the most recent write; `None` until then
    current_key: Option<String>,
    writer: Option<BufWriter<File>>,
}

/// Stateful sink appending to a file whose path is derived from each
/// record's timestamp.
///
/// The rotation check, file switch, and write form one atomic unit under a
/// mutex, so two threads can never both decide to rotate and leak a handle
/// or lose a record across the boundary.
pub struct RotatingFileSink {
    template: String,
    make_dirs: bool,
    flush_policy: FlushPolicy,
    min_level: Option<Level>,
    layout: LayoutHandle,
    state: Mutex<RotationState>,
}

impl std::fmt::Debug for RotatingFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileSink")
            .field("template", &self.template)
            .field("make_dirs", &self.make_dirs)
            .field("flush_policy", &self.flush_policy)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl RotatingFileSink {
    /// Create a sink for a strftime path template like
    /// `/var/log/myservice-%Y%m%d.log`.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidPathTemplate`] when the template is
    /// empty or contains a placeholder chrono cannot format. No file is
    /// opened until the first write.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        Self::validate_template(&template)?;
        Ok(Self {
            template,
            make_dirs: true,
            flush_policy: FlushPolicy::default(),
            min_level: None,
            layout: Arc::new(TextLayout::default()),
            state: Mutex::new(RotationState {
                current_key: None,
                writer: None,
            }),
        })
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutHandle) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush_policy = policy;
        self
    }

    /// Drop records below `level` at this sink only, independent of the
    /// logger thresholds and filters that gate the whole dispatch.
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Whether to create missing parent directories when rotating to a new
    /// path. On by default.
    #[must_use]
    pub fn with_make_dirs(mut self, make_dirs: bool) -> Self {
        self.make_dirs = make_dirs;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Path of the file currently open, if any write has happened yet.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.state.lock().current_key.as_ref().map(PathBuf::from)
    }

    fn validate_template(template: &str) -> Result<()> {
        if template.is_empty() {
            return Err(LoggerError::invalid_template(template, "template is empty"));
        }
        for item in StrftimeItems::new(template) {
            if matches!(item, Item::Error) {
                return Err(LoggerError::invalid_template(
                    template,
                    "unrecognized strftime placeholder",
                ));
            }
        }
        Ok(())
    }

    /// Close the current file and open the one named by `key`.
    fn rotate(&self, state: &mut RotationState, key: String) -> Result<()> {
        if let Some(mut writer) = state.writer.take() {
            // The old key no longer describes an open file; forgetting it
            // makes the next write retry the rotation after a failure here.
            state.current_key = None;
            writer.flush().map_err(|e| {
                LoggerError::rotation(&key, format!("failed to flush previous file: {}", e))
            })?;
        }

        let path = PathBuf::from(&key);
        if self.make_dirs {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        LoggerError::io_operation(
                            "creating log directory",
                            format!("cannot create '{}'", parent.display()),
                            e,
                        )
                    })?;
                }
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        state.writer = Some(BufWriter::new(file));
        state.current_key = Some(key);
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn write(&self, record: &Record) -> Result<()> {
        if self.min_level.is_some_and(|min| record.level < min) {
            return Ok(());
        }
        // Local time drives the path, matching the wall-clock boundaries
        // operators expect in file names.
        let key = record
            .timestamp
            .with_timezone(&Local)
            .format(&self.template)
            .to_string();

        let mut state = self.state.lock();
        if state.current_key.as_deref() != Some(key.as_str()) {
            self.rotate(&mut state, key)?;
        }

        let line = self.layout.render(record);
        let writer = state
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_write("rotating_file", "writer not open"))?;

        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|e| LoggerError::sink_write("rotating_file", e.to_string()))?;

        if self.flush_policy == FlushPolicy::EveryRecord {
            writer
                .flush()
                .map_err(|e| LoggerError::sink_write("rotating_file", e.to_string()))?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(ref mut writer) = self.state.lock().writer {
            writer
                .flush()
                .map_err(|e| LoggerError::sink_write("rotating_file", e.to_string()))?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "rotating_file"
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        // Best effort: release the handle with buffered data written out
        if let Some(mut writer) = self.state.lock().writer.take() {
            let _ = writer.flush();
        }
    }
}
