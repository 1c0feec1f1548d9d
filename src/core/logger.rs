//! Logger nodes in the naming hierarchy

use super::attributes::Attributes;
use super::dispatch::{self, Dispatch};
use super::filter::Filter;
use super::level::Level;
use super::record::Record;
use super::registry::Shared;
use super::sink::SinkHandle;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// One named node in the logger hierarchy.
///
/// A node owns its own optional level override plus its own filter and sink
/// lists; everything else is resolved by walking ancestors at dispatch time.
/// Nodes are created by the [`Registry`](super::registry::Registry) and live
/// for the process lifetime, so the parent link is a `Weak` that in practice
/// always upgrades.
pub struct Logger {
    name: String,
    parent: Option<Weak<Logger>>,
    level: RwLock<Option<Level>>,
    filters: RwLock<Vec<Arc<dyn Filter>>>,
    sinks: RwLock<Vec<SinkHandle>>,
    shared: Arc<Shared>,
}

impl Logger {
    pub(crate) fn new(name: String, parent: Option<Weak<Logger>>, shared: Arc<Shared>) -> Self {
        Self {
            name,
            parent,
            level: RwLock::new(None),
            filters: RwLock::new(Vec::new()),
            sinks: RwLock::new(Vec::new()),
            shared,
        }
    }

    /// Full dotted path of this logger; the root's name is empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<Arc<Logger>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Ancestor chain from the immediate parent up to the root.
    pub fn ancestors(&self) -> Vec<Arc<Logger>> {
        let mut chain = Vec::new();
        let mut current = self.parent();
        while let Some(node) = current {
            current = node.parent();
            chain.push(node);
        }
        chain
    }

    /// This node's own level override, if any.
    pub fn own_level(&self) -> Option<Level> {
        *self.level.read()
    }

    /// Override the threshold for this node and all descendants that do not
    /// set their own.
    pub fn set_level(&self, level: Level) {
        *self.level.write() = Some(level);
    }

    /// Remove the override so the nearest ancestor's level applies again.
    pub fn clear_level(&self) {
        *self.level.write() = None;
    }

    /// The threshold in effect for this node: the first own level walking
    /// from self to root, or the registry default when none is set.
    pub fn effective_level(&self) -> Level {
        if let Some(level) = self.own_level() {
            return level;
        }
        for ancestor in self.ancestors() {
            if let Some(level) = ancestor.own_level() {
                return level;
            }
        }
        self.shared.default_level
    }

    /// Append a filter to this node's own list. Filters accumulate down the
    /// hierarchy; they are never overridden by descendants.
    pub fn add_filter<F: Filter + 'static>(&self, filter: F) {
        self.filters.write().push(Arc::new(filter));
    }

    /// Attach a sink. The same `Arc` attached at several nodes still fires
    /// once per record.
    pub fn add_sink(&self, sink: SinkHandle) {
        self.sinks.write().push(sink);
    }

    pub(crate) fn replace_sinks(&self, sinks: Vec<SinkHandle>) {
        *self.sinks.write() = sinks;
    }

    pub(crate) fn own_filters(&self) -> Vec<Arc<dyn Filter>> {
        self.filters.read().clone()
    }

    pub(crate) fn own_sinks(&self) -> Vec<SinkHandle> {
        self.sinks.read().clone()
    }

    pub(crate) fn shared(&self) -> &Shared {
        &self.shared
    }

    /// Emit a record and return the full dispatch outcome, including any
    /// per-sink failures, for callers that want to observe delivery.
    pub fn emit(
        &self,
        level: Level,
        message: impl Into<String>,
        attributes: Attributes,
    ) -> Dispatch {
        let record = Record::new(self.name.clone(), level, message).with_attributes(attributes);
        dispatch::dispatch(self, &record)
    }

    /// Emit a message. Sink failures are reported through the registry's
    /// error hook; they never panic and never stop delivery to other sinks.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.log_with_attrs(level, message, Attributes::new());
    }

    /// Emit a message with structured attributes.
    pub fn log_with_attrs(&self, level: Level, message: impl Into<String>, attrs: Attributes) {
        let outcome = self.emit(level, message, attrs);
        for failure in &outcome.failures {
            self.shared.report(failure);
        }
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Level::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Helper for structured info logging
    pub fn info_with_attrs(&self, message: impl Into<String>, attrs: Attributes) {
        self.log_with_attrs(Level::Info, message, attrs);
    }

    /// Helper for structured error logging
    pub fn error_with_attrs(&self, message: impl Into<String>, attrs: Attributes) {
        self.log_with_attrs(Level::Error, message, attrs);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("own_level", &self.own_level())
            .field("filters", &self.filters.read().len())
            .field("sinks", &self.sinks.read().len())
            .finish()
    }
}
