//! Sink implementations

pub mod memory;
pub mod rotating_file;
pub mod stream;

#[cfg(feature = "console")]
pub mod console;

pub use memory::MemorySink;
pub use rotating_file::{FlushPolicy, RotatingFileSink};
pub use stream::StreamSink;

#[cfg(feature = "console")]
pub use console::ConsoleSink;

// Re-export the trait alongside its implementations
pub use crate::core::{Sink, SinkHandle};
