//! Per-emit dispatch: resolve effective properties and deliver
//!
//! One record flows through three gates: the effective level threshold, the
//! root-to-self filter chain, and finally delivery to the deduplicated
//! root-to-self sink set. The first two gates drop by design; delivery
//! failures are collected, never swallowed and never allowed to block a
//! peer sink.

use super::error::LoggerError;
use super::filter::Filter;
use super::logger::Logger;
use super::record::Record;
use super::sink::{Sink, SinkHandle};
use std::sync::Arc;

/// How dispatch resolved one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Passed both gates; `sinks` is the count of successful deliveries
    Delivered { sinks: usize },
    /// Below the effective level threshold
    BelowLevel,
    /// Rejected by a filter in the effective chain
    Rejected,
}

/// Result of one emit call.
#[derive(Debug)]
pub struct Dispatch {
    pub outcome: Outcome,
    /// Per-sink failures; delivery to remaining sinks still happened
    pub failures: Vec<LoggerError>,
}

impl Dispatch {
    fn dropped(outcome: Outcome) -> Self {
        Self {
            outcome,
            failures: Vec::new(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, Outcome::Delivered { .. })
    }
}

pub(crate) fn dispatch(logger: &Logger, record: &Record) -> Dispatch {
    let metrics = &logger.shared().metrics;
    metrics.record_emitted();

    if record.level < logger.effective_level() {
        metrics.record_below_level();
        return Dispatch::dropped(Outcome::BelowLevel);
    }

    // Root-to-self node order; filters and sinks both accumulate this way.
    let ancestors = logger.ancestors();
    let mut chain: Vec<&Logger> = ancestors.iter().rev().map(|a| a.as_ref()).collect();
    chain.push(logger);

    for node in &chain {
        for filter in node.own_filters() {
            if !filter.accept(record) {
                metrics.record_rejected();
                return Dispatch::dropped(Outcome::Rejected);
            }
        }
    }

    // A sink reachable through several ancestors fires once per record.
    let mut resolved: Vec<SinkHandle> = Vec::new();
    for node in &chain {
        for sink in node.own_sinks() {
            if !resolved.iter().any(|seen| Arc::ptr_eq(seen, &sink)) {
                resolved.push(sink);
            }
        }
    }

    let mut failures = Vec::new();
    let mut delivered = 0usize;
    for sink in &resolved {
        match sink.write(record) {
            Ok(()) => delivered += 1,
            Err(error) => failures.push(error),
        }
    }

    metrics.record_delivered(delivered as u64);
    metrics.record_sink_errors(failures.len() as u64);

    Dispatch {
        outcome: Outcome::Delivered { sinks: delivered },
        failures,
    }
}
