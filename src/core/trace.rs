//! Entry/exit tracing helpers
//!
//! Explicit wrappers around the plain `log` call: a guard that logs
//! "entering" on creation and "exited" on drop, and a call helper that
//! wraps a closure in one. Composition sugar, not part of dispatch.

use super::logger::Logger;

/// RAII guard logging scope entry and exit at trace level.
pub struct ScopedTrace<'a> {
    logger: &'a Logger,
    label: String,
}

impl Drop for ScopedTrace<'_> {
    fn drop(&mut self) {
        self.logger.trace(format!("exited {}", self.label));
    }
}

impl Logger {
    /// Log `entering <label>` now and `exited <label>` when the returned
    /// guard drops, including on unwind.
    pub fn trace_scope(&self, label: impl Into<String>) -> ScopedTrace<'_> {
        let label = label.into();
        self.trace(format!("entering {}", label));
        ScopedTrace { logger: self, label }
    }

    /// Run `f` inside a [`ScopedTrace`] and return its result.
    pub fn trace_call<T>(&self, label: &str, f: impl FnOnce() -> T) -> T {
        let _guard = self.trace_scope(label);
        f()
    }
}
