//! Property-based tests for names, levels, and dispatch invariants

use hierlog::sinks::MemorySink;
use hierlog::{Level, LoggerError, Record, Registry};
use proptest::prelude::*;
use std::sync::Arc;

/// Strategy for well-formed dotted names: 1..=4 non-empty segments
fn valid_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,7}", 1..=4).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn prop_valid_names_create_and_return_same_node(name in valid_name()) {
        let registry = Registry::new();
        let first = registry.get_or_create(&name).unwrap();
        let second = registry.get_or_create(&name).unwrap();
        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert_eq!(first.name(), name.as_str());
    }

    #[test]
    fn prop_ancestor_chain_matches_segments(name in valid_name()) {
        let registry = Registry::new();
        let logger = registry.get_or_create(&name).unwrap();

        // One ancestor per dot, plus the root
        let segments = name.split('.').count();
        let ancestors = logger.ancestors();
        prop_assert_eq!(ancestors.len(), segments);
        prop_assert_eq!(ancestors.last().unwrap().name(), "");
    }

    #[test]
    fn prop_names_with_empty_segments_rejected(name in valid_name(), position in 0usize..3) {
        let malformed = match position {
            0 => format!(".{}", name),
            1 => format!("{}.", name),
            _ => format!("{}..x", name),
        };
        let registry = Registry::new();
        let err = registry.get_or_create(&malformed).unwrap_err();
        let is_invalid_name = matches!(err, LoggerError::InvalidLoggerName { .. });
        prop_assert!(is_invalid_name);
    }

    #[test]
    fn prop_level_parse_roundtrip(level in prop::sample::select(Level::ALL.to_vec())) {
        let parsed: Level = level.as_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    #[test]
    fn prop_threshold_gate_is_total(
        own in prop::sample::select(Level::ALL.to_vec()),
        emitted in prop::sample::select(Level::ALL.to_vec()),
    ) {
        let registry = Registry::new();
        let logger = registry.get_or_create("gate").unwrap();
        logger.set_level(own);

        let sink = Arc::new(MemorySink::new());
        logger.add_sink(sink.clone());

        logger.log(emitted, "probe");
        let delivered = !sink.is_empty();
        prop_assert_eq!(delivered, emitted >= own);
    }

    #[test]
    fn prop_sanitized_messages_are_single_line(message in ".{0,64}") {
        let record = Record::new("prop", Level::Info, message);
        prop_assert!(!record.message.contains('\n'));
        prop_assert!(!record.message.contains('\r'));
    }
}
