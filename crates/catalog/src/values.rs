use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Current user-entered values, keyed by field key.
///
/// This is the explicit replacement for the original adapters' dynamic
/// attribute lookup: the engine reads values by computed field key, so
/// the store must be a plain mapping with O(1) access rather than
/// member resolution on a component object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    #[serde(flatten)]
    values: HashMap<String, serde_json::Value>,
}

impl FieldValues {
    /// Create an empty value store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by field key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Set a value for a field key.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    /// Set a value (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Remove a value by key, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    /// Check whether a value exists for the given key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The number of values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Try to get a value as a string reference.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_str()
    }

    /// Try to get a value as bool.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key)?.as_bool()
    }

    /// Try to get a value as i64.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key)?.as_i64()
    }
}

impl FromIterator<(String, serde_json::Value)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn set_and_get() {
        let mut values = FieldValues::new();
        assert!(values.is_empty());

        values.set("X_title", json!("Hi"));
        assert_eq!(values.get("X_title"), Some(&json!("Hi")));
        assert_eq!(values.len(), 1);
        assert!(values.contains("X_title"));
        assert!(!values.contains("X_missing"));
    }

    #[test]
    fn builder_style_with() {
        let values = FieldValues::new()
            .with("a", json!(1))
            .with("b", json!("two"));
        assert_eq!(values.len(), 2);
        assert_eq!(values.get_i64("a"), Some(1));
        assert_eq!(values.get_string("b"), Some("two"));
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut values = FieldValues::new().with("x", json!(true));
        assert_eq!(values.remove("x"), Some(json!(true)));
        assert_eq!(values.remove("x"), None);
        assert!(values.is_empty());
    }

    #[test]
    fn typed_getters_reject_wrong_types() {
        let values = FieldValues::new().with("s", json!("text"));
        assert_eq!(values.get_string("s"), Some("text"));
        assert_eq!(values.get_bool("s"), None);
        assert_eq!(values.get_i64("s"), None);
    }

    #[test]
    fn serde_flattens_to_plain_object() {
        let values = FieldValues::new().with("k", json!("v"));
        let json_str = serde_json::to_string(&values).unwrap();
        assert_eq!(json_str, r#"{"k":"v"}"#);

        let back: FieldValues = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, values);
    }
}
