//! In-memory sink capturing records

use crate::core::{Record, Result, Sink};
use parking_lot::Mutex;

/// Sink that keeps every delivered record in memory.
///
/// Handy for assertions in tests and for embedders that want to inspect
/// recent records programmatically.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &Record) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn test_captures_in_order() {
        let sink = MemorySink::new();
        sink.write(&Record::new("a", Level::Info, "one")).unwrap();
        sink.write(&Record::new("a", Level::Warn, "two")).unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].level, Level::Warn);

        sink.clear();
        assert!(sink.is_empty());
    }
}
