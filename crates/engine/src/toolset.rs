//! The boundary to the remote action execution service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A failure reported by the toolset transport itself.
///
/// Remote-side action failures are not errors; they come back inside
/// [`RawResult`] with `successful` set to `false`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ToolsetError {
    /// Human-readable failure description.
    pub message: String,
}

impl ToolsetError {
    /// Creates a transport error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The untyped response envelope returned by the toolset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    /// Whether the remote action reported success.
    #[serde(default)]
    pub successful: bool,
    /// The payload, success or failure details alike.
    #[serde(default)]
    pub data: Value,
    /// Transport-level error text, when the envelope carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RawResult {
    /// A successful envelope wrapping `data`.
    #[must_use]
    pub fn success(data: Value) -> Self {
        Self {
            successful: true,
            data,
            error: None,
        }
    }

    /// A failed envelope wrapping `data`.
    #[must_use]
    pub fn failure(data: Value) -> Self {
        Self {
            successful: false,
            data,
            error: None,
        }
    }
}

/// Executes actions against the remote aggregation service.
///
/// Implementations wrap the vendor SDK; the engine never constructs
/// requests itself. One blocking call per action, no retries.
#[cfg_attr(test, mockall::automock)]
pub trait Toolset {
    /// Runs the action identified by `action_id` with the given parameters
    /// and returns the raw response envelope.
    fn execute_action(
        &self,
        action_id: &str,
        params: &Map<String, Value>,
    ) -> Result<RawResult, ToolsetError>;
}

/// The action inventory of a configured toolset.
///
/// Maps catalog action keys to the identifiers the provider SDK expects.
/// The map is supplied by the integration host at setup time and treated
/// as read-only; the catalog and the provider's inventory evolve
/// independently, so a lookup miss means the two have drifted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionIdMap {
    ids: IndexMap<String, String>,
}

impl ActionIdMap {
    /// An empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one `action_key -> provider identifier` entry.
    #[must_use]
    pub fn with(mut self, action_key: impl Into<String>, id: impl Into<String>) -> Self {
        self.ids.insert(action_key.into(), id.into());
        self
    }

    /// An inventory where every key maps to itself, the common case for
    /// providers that use catalog keys as identifiers.
    pub fn identity<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = keys
            .into_iter()
            .map(|key| {
                let key = key.into();
                (key.clone(), key)
            })
            .collect();
        Self { ids }
    }

    /// The provider identifier for `action_key`, if the toolset exposes it.
    #[must_use]
    pub fn get(&self, action_key: &str) -> Option<&str> {
        self.ids.get(action_key).map(String::as_str)
    }

    /// Number of known actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ActionIdMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            ids: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn raw_result_deserializes_with_defaults() {
        let raw: RawResult = serde_json::from_value(json!({"data": {"id": 1}})).unwrap();
        assert!(!raw.successful);
        assert_eq!(raw.data, json!({"id": 1}));
        assert_eq!(raw.error, None);
    }

    #[test]
    fn identity_map_round_trips_keys() {
        let map = ActionIdMap::identity(["REDDIT_CREATE_REDDIT_POST"]);
        assert_eq!(map.get("REDDIT_CREATE_REDDIT_POST"), Some("REDDIT_CREATE_REDDIT_POST"));
        assert_eq!(map.get("REDDIT_DELETE_REDDIT_POST"), None);
        assert_eq!(map.len(), 1);
    }
}
