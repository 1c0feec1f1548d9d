//! Filter predicates over log records

use super::record::Record;

/// A side-effect-free predicate deciding whether a record proceeds.
///
/// Filters compose across the logger hierarchy: the effective sequence for
/// a node is the root-to-self concatenation of every ancestor's own filters,
/// and all of them must accept a record. Order within a node's list is
/// significant.
pub trait Filter: Send + Sync {
    fn accept(&self, record: &Record) -> bool;
}

/// Plain closures are filters, keeping function ergonomics first-class.
impl<F> Filter for F
where
    F: Fn(&Record) -> bool + Send + Sync,
{
    fn accept(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Filter that only accepts records at or above a minimum level.
///
/// Useful for letting a broad sink on an ancestor ignore chatter from
/// noisy descendants without changing their thresholds.
pub struct MinLevelFilter {
    min_level: crate::core::Level,
}

impl MinLevelFilter {
    pub fn new(min_level: crate::core::Level) -> Self {
        Self { min_level }
    }
}

impl Filter for MinLevelFilter {
    fn accept(&self, record: &Record) -> bool {
        record.level >= self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn test_closure_filter() {
        let filter = |record: &Record| !record.message.contains("secret");
        let public = Record::new("a", Level::Info, "public data");
        let private = Record::new("a", Level::Info, "secret data");
        assert!(filter.accept(&public));
        assert!(!filter.accept(&private));
    }

    #[test]
    fn test_min_level_filter() {
        let filter = MinLevelFilter::new(Level::Warn);
        assert!(!filter.accept(&Record::new("a", Level::Info, "x")));
        assert!(filter.accept(&Record::new("a", Level::Warn, "x")));
        assert!(filter.accept(&Record::new("a", Level::Error, "x")));
    }
}
