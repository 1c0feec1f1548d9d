//! Structured key-value attributes attached to log records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Ordered set of structured fields for one log record.
///
/// Keys are kept sorted so text and JSON output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    fields: BTreeMap<String, FieldValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field in place
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Format all fields as space-separated `key=value` pairs
    pub fn format_pairs(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from("abc"), FieldValue::String("abc".into()));
        assert_eq!(FieldValue::from(42i32), FieldValue::Int(42));
        assert_eq!(FieldValue::from(1.5), FieldValue::Float(1.5));
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
    }

    #[test]
    fn test_format_pairs_sorted() {
        let attrs = Attributes::new()
            .with("zeta", 1)
            .with("alpha", "x")
            .with("mid", false);
        assert_eq!(attrs.format_pairs(), "alpha=x mid=false zeta=1");
    }

    #[test]
    fn test_json_value() {
        assert_eq!(
            FieldValue::Int(7).to_json_value(),
            serde_json::Value::Number(7.into())
        );
        assert_eq!(FieldValue::Null.to_json_value(), serde_json::Value::Null);
        // NaN has no JSON representation
        assert_eq!(
            FieldValue::Float(f64::NAN).to_json_value(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_insert_and_get() {
        let mut attrs = Attributes::new();
        attrs.insert("user", "alice");
        assert_eq!(attrs.get("user"), Some(&FieldValue::String("alice".into())));
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.is_empty());
    }
}
