//! Basic root-logger configuration

use super::layout::LayoutHandle;
use super::level::Level;
use super::registry::Registry;
use super::sink::SinkHandle;
use crate::sinks::StreamSink;
use std::sync::Arc;

/// One-call setup applied to a registry's root logger.
///
/// Replaces the root's sink list and level, so it is safe to call
/// repeatedly but will discard sinks configured elsewhere on the root.
/// When no sink is given, a stderr [`StreamSink`] with the default
/// [`TextLayout`] is installed.
///
/// # Example
/// ```no_run
/// use hierlog::{BasicConfig, Level};
///
/// hierlog::basic_config(BasicConfig::new().level(Level::Debug));
/// hierlog::get("app").unwrap().debug("configured");
/// ```
pub struct BasicConfig {
    level: Level,
    layout: Option<LayoutHandle>,
    sinks: Vec<SinkHandle>,
}

impl BasicConfig {
    pub fn new() -> Self {
        Self {
            level: Level::default(),
            layout: None,
            sinks: Vec::new(),
        }
    }

    /// Threshold to set on the root logger
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Layout for the default stderr sink. Has no effect when explicit
    /// sinks are given; configure those directly instead.
    #[must_use]
    pub fn layout(mut self, layout: LayoutHandle) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Add a sink to install on the root logger
    #[must_use]
    pub fn sink(mut self, sink: SinkHandle) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Apply this configuration to `registry`'s root logger.
    pub fn apply(self, registry: &Registry) {
        let sinks = if self.sinks.is_empty() {
            let mut stderr = StreamSink::stderr();
            if let Some(layout) = self.layout {
                stderr = stderr.with_layout(layout);
            }
            vec![Arc::new(stderr) as SinkHandle]
        } else {
            self.sinks
        };
        let root = registry.root();
        root.replace_sinks(sinks);
        root.set_level(self.level);
    }
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_apply_sets_level_and_sinks() {
        let registry = Registry::new();
        let sink = Arc::new(MemorySink::new());

        BasicConfig::new()
            .level(Level::Warn)
            .sink(sink.clone())
            .apply(&registry);

        let root = registry.root();
        assert_eq!(root.own_level(), Some(Level::Warn));

        root.info("dropped");
        root.error("kept");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_default_sink_uses_configured_layout() {
        let registry = Registry::new();
        let renders = Arc::new(AtomicUsize::new(0));
        let counter = renders.clone();
        let layout = move |record: &Record| {
            counter.fetch_add(1, Ordering::SeqCst);
            record.message.clone()
        };

        BasicConfig::new().layout(Arc::new(layout)).apply(&registry);
        registry.root().info("hello");

        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reapply_resets_sinks() {
        let registry = Registry::new();
        let first = Arc::new(MemorySink::new());
        let second = Arc::new(MemorySink::new());

        BasicConfig::new().sink(first.clone()).apply(&registry);
        BasicConfig::new().sink(second.clone()).apply(&registry);

        registry.root().info("only the second sink sees this");
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }
}
