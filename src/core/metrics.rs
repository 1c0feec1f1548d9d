//! Dispatch counters shared across a registry

use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals for dispatch decisions.
///
/// Every logger in a registry shares one instance, so the counters describe
/// the whole hierarchy. All counters are monotonic for the process lifetime.
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    emitted: AtomicU64,
    below_level: AtomicU64,
    rejected: AtomicU64,
    delivered: AtomicU64,
    sink_errors: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_below_level(&self) {
        self.below_level.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delivered(&self, sinks: u64) {
        self.delivered.fetch_add(sinks, Ordering::Relaxed);
    }

    pub(crate) fn record_sink_errors(&self, errors: u64) {
        self.sink_errors.fetch_add(errors, Ordering::Relaxed);
    }

    /// Records constructed by emit calls
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Records discarded by the effective level gate
    pub fn below_level(&self) -> u64 {
        self.below_level.load(Ordering::Relaxed)
    }

    /// Records rejected by a filter
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Successful per-sink deliveries
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Failed per-sink delivery attempts
    pub fn sink_errors(&self) -> u64 {
        self.sink_errors.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = DispatchMetrics::new();
        assert_eq!(metrics.emitted(), 0);

        metrics.record_emitted();
        metrics.record_emitted();
        metrics.record_below_level();
        metrics.record_delivered(3);
        metrics.record_sink_errors(1);

        assert_eq!(metrics.emitted(), 2);
        assert_eq!(metrics.below_level(), 1);
        assert_eq!(metrics.rejected(), 0);
        assert_eq!(metrics.delivered(), 3);
        assert_eq!(metrics.sink_errors(), 1);
    }
}
