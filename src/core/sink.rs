//! Sink trait for log output destinations

use super::error::Result;
use super::record::Record;
use std::sync::Arc;

/// A consumer of records that passed the level gate and all filters.
///
/// Sinks are shared: any number of loggers may reference the same instance
/// through an [`Arc`], so `write` takes `&self` and each implementation
/// serializes its own internal state. Dispatch deduplicates by `Arc`
/// pointer identity, which means a sink attached at several points in the
/// hierarchy still receives each record exactly once.
pub trait Sink: Send + Sync {
    /// Deliver one record. A failure is scoped to this attempt; it must
    /// never panic or terminate the process.
    fn write(&self, record: &Record) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Shared handle to a sink; the unit of identity for dispatch dedup.
pub type SinkHandle = Arc<dyn Sink>;
