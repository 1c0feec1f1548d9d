//! Process-wide logger registry keyed by dotted names

use super::error::{LoggerError, Result};
use super::level::Level;
use super::logger::Logger;
use super::metrics::DispatchMetrics;
use super::sink::{Sink, SinkHandle};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Callback invoked when a sink delivery fails.
pub type ErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// State every logger in a registry shares.
pub(crate) struct Shared {
    pub(crate) default_level: Level,
    pub(crate) metrics: DispatchMetrics,
    error_hook: RwLock<Option<ErrorCallback>>,
}

impl Shared {
    fn new(default_level: Level) -> Self {
        Self {
            default_level,
            metrics: DispatchMetrics::new(),
            error_hook: RwLock::new(None),
        }
    }

    /// Surface a sink failure: through the registered hook if any,
    /// otherwise to stderr. Never panics, never exits.
    pub(crate) fn report(&self, error: &LoggerError) {
        let hook = self.error_hook.read().clone();
        match hook {
            Some(hook) => hook(error),
            None => eprintln!("[LOGGER ERROR] {}", error),
        }
    }

    fn set_error_hook(&self, hook: ErrorCallback) {
        *self.error_hook.write() = Some(hook);
    }
}

/// Store mapping dotted names to logger nodes, with lazy creation and
/// parent linking.
///
/// The root node (empty name) always exists. `get_or_create("a.b.c")`
/// guarantees nodes for `"a.b"`, `"a"`, and root exist and are linked,
/// without touching any configuration already set on them. Nodes are never
/// deleted; the map grows monotonically for the process lifetime.
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    root: Arc<Logger>,
    shared: Arc<Shared>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_default_level(Level::default())
    }

    /// Create a registry whose loggers fall back to `default_level` when no
    /// node on their ancestor chain overrides it.
    pub fn with_default_level(default_level: Level) -> Self {
        let shared = Arc::new(Shared::new(default_level));
        let root = Arc::new(Logger::new(String::new(), None, shared.clone()));
        let mut loggers = HashMap::new();
        loggers.insert(String::new(), root.clone());
        Self {
            loggers: RwLock::new(loggers),
            root,
            shared,
        }
    }

    pub fn root(&self) -> Arc<Logger> {
        self.root.clone()
    }

    /// Get the logger for `name`, creating it and any missing ancestors.
    ///
    /// Deterministic: the same name always yields the same instance.
    /// Malformed names (leading/trailing dot, empty segment) are rejected
    /// immediately with [`LoggerError::InvalidLoggerName`].
    pub fn get_or_create(&self, name: &str) -> Result<Arc<Logger>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(self.root.clone());
        }
        Self::validate_name(name)?;

        if let Some(existing) = self.loggers.read().get(name) {
            return Ok(existing.clone());
        }

        // Build the whole ancestor chain under one write lock so concurrent
        // first-access for the same name has a single winner.
        let mut map = self.loggers.write();
        let mut parent = self.root.clone();
        let mut prefix = String::with_capacity(name.len());
        for segment in name.split('.') {
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(segment);

            parent = match map.get(&prefix) {
                Some(existing) => existing.clone(),
                None => {
                    let node = Arc::new(Logger::new(
                        prefix.clone(),
                        Some(Arc::downgrade(&parent)),
                        self.shared.clone(),
                    ));
                    map.insert(prefix.clone(), node.clone());
                    node
                }
            };
        }
        Ok(parent)
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.starts_with('.') {
            return Err(LoggerError::invalid_name(name, "leading dot"));
        }
        if name.ends_with('.') {
            return Err(LoggerError::invalid_name(name, "trailing dot"));
        }
        if name.contains("..") {
            return Err(LoggerError::invalid_name(name, "empty segment"));
        }
        Ok(())
    }

    /// Number of loggers created so far, root included.
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists
        false
    }

    /// Register a callback that receives every surfaced sink failure.
    /// Without one, failures go to stderr.
    pub fn set_error_hook(&self, hook: ErrorCallback) {
        self.shared.set_error_hook(hook);
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.shared.metrics
    }

    /// Flush every distinct sink attached anywhere in the hierarchy.
    /// Intended for explicit scoped shutdown before process exit.
    ///
    /// Every sink is flushed even when an earlier one fails: the first
    /// failure is returned and any further failures go through the error
    /// hook, so a broken sink cannot strand another sink's buffered records.
    pub fn flush(&self) -> Result<()> {
        let mut seen: Vec<SinkHandle> = Vec::new();
        {
            let map = self.loggers.read();
            let mut names: Vec<&String> = map.keys().collect();
            names.sort();
            for name in names {
                for sink in map[name.as_str()].own_sinks() {
                    if !seen.iter().any(|s| Arc::ptr_eq(s, &sink)) {
                        seen.push(sink);
                    }
                }
            }
        }
        let mut first_error = None;
        for sink in &seen {
            if let Err(error) = sink.flush() {
                match first_error {
                    None => first_error = Some(error),
                    Some(_) => self.shared.report(&error),
                }
            }
        }
        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, initialized at first use.
pub fn global() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(Registry::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_instance() {
        let registry = Registry::new();
        let first = registry.get_or_create("a.b.c").unwrap();
        let second = registry.get_or_create("a.b.c").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_implicit_ancestor_creation() {
        let registry = Registry::new();
        registry.get_or_create("a.b.c").unwrap();

        // Chain exists: root, a, a.b, a.b.c
        assert_eq!(registry.len(), 4);
        let mid = registry.get_or_create("a.b").unwrap();
        assert_eq!(mid.name(), "a.b");
        assert_eq!(mid.parent().unwrap().name(), "a");
    }

    #[test]
    fn test_ancestor_creation_preserves_configuration() {
        let registry = Registry::new();
        let parent = registry.get_or_create("a").unwrap();
        parent.set_level(Level::Error);

        // Creating a deeper name must not reset the configured ancestor
        registry.get_or_create("a.b.c").unwrap();
        assert_eq!(parent.own_level(), Some(Level::Error));
        assert!(Arc::ptr_eq(&parent, &registry.get_or_create("a").unwrap()));
    }

    #[test]
    fn test_empty_name_is_root() {
        let registry = Registry::new();
        let root = registry.get_or_create("").unwrap();
        assert!(Arc::ptr_eq(&root, &registry.root()));
    }

    #[test]
    fn test_malformed_names_rejected() {
        let registry = Registry::new();
        for name in [".a", "a.", "a..b", "a.b..c."] {
            let err = registry.get_or_create(name).unwrap_err();
            assert!(
                matches!(err, LoggerError::InvalidLoggerName { .. }),
                "expected rejection for {:?}",
                name
            );
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn test_name_is_trimmed() {
        let registry = Registry::new();
        let padded = registry.get_or_create("  a.b  ").unwrap();
        let plain = registry.get_or_create("a.b").unwrap();
        assert!(Arc::ptr_eq(&padded, &plain));
    }

    #[test]
    fn test_custom_default_level() {
        let registry = Registry::with_default_level(Level::Trace);
        let logger = registry.get_or_create("verbose").unwrap();
        assert_eq!(logger.effective_level(), Level::Trace);
    }
}
