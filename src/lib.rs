//! # hierlog
//!
//! Hierarchical logging: obtain a logger by dotted name, emit leveled
//! messages, and route them through filters and sinks configured anywhere
//! on the ancestor chain.
//!
//! ## Model
//!
//! - Levels are inherited: a node without its own threshold uses the
//!   nearest ancestor's.
//! - Filters and sinks accumulate: the effective lists are the root-to-self
//!   concatenation, so a sink attached at `planets` receives everything
//!   `planets.mercury` emits, deduplicated by sink identity.
//! - Emits are synchronous and never panic or exit the process; sink
//!   failures are surfaced through the registry's error hook.
//!
//! ## Example
//!
//! ```
//! use hierlog::sinks::MemorySink;
//! use hierlog::{Level, Registry};
//! use std::sync::Arc;
//!
//! let registry = Registry::new();
//! let sink = Arc::new(MemorySink::new());
//!
//! let planets = registry.get_or_create("planets").unwrap();
//! planets.set_level(Level::Debug);
//! planets.add_sink(sink.clone());
//!
//! let mercury = registry.get_or_create("planets.mercury").unwrap();
//! mercury.debug("perihelion reached");
//!
//! assert_eq!(sink.len(), 1);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Attributes, BasicConfig, Dispatch, DispatchMetrics, ErrorCallback, FieldValue, Filter,
        JsonLayout, Layout, LayoutHandle, Level, Logger, LoggerError, MinLevelFilter, Outcome,
        Record, Registry, Result, ScopedTrace, Sink, SinkHandle, TextLayout, TimestampFormat,
    };
    pub use crate::sinks::{FlushPolicy, MemorySink, RotatingFileSink, StreamSink};

    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
}

pub use crate::core::{
    Attributes, BasicConfig, Dispatch, DispatchMetrics, ErrorCallback, FieldValue, Filter,
    JsonLayout, Layout, LayoutHandle, Level, Logger, LoggerError, MinLevelFilter, Outcome, Record,
    Registry, Result, ScopedTrace, Sink, SinkHandle, TextLayout, TimestampFormat,
};
pub use crate::sinks::{FlushPolicy, MemorySink, RotatingFileSink, StreamSink};

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;

use std::sync::Arc;

/// Get a logger from the process-wide registry by dotted name, creating it
/// and any missing ancestors on first access.
pub fn get(name: &str) -> Result<Arc<Logger>> {
    core::registry::global().get_or_create(name)
}

/// The process-wide root logger.
pub fn root() -> Arc<Logger> {
    core::registry::global().root()
}

/// Apply a [`BasicConfig`] to the process-wide root logger.
pub fn basic_config(config: BasicConfig) {
    config.apply(core::registry::global());
}

/// Log a trace message through the process-wide root logger.
pub fn trace(message: impl Into<String>) {
    root().trace(message);
}

/// Log a debug message through the process-wide root logger.
pub fn debug(message: impl Into<String>) {
    root().debug(message);
}

/// Log an info message through the process-wide root logger.
pub fn info(message: impl Into<String>) {
    root().info(message);
}

/// Log a warning through the process-wide root logger.
pub fn warn(message: impl Into<String>) {
    root().warn(message);
}

/// Log an error through the process-wide root logger.
pub fn error(message: impl Into<String>) {
    root().error(message);
}
