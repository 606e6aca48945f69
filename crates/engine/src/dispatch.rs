//! Forwarding a built action call to the toolset.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use toolbridge_catalog::action::ActionSpec;

use crate::error::EngineError;
use crate::toolset::{ActionIdMap, RawResult, Toolset};

/// Sends resolved action calls through a toolset.
///
/// The dispatcher owns no policy: one blocking call per action, no
/// retries, no timeouts. Scheduling belongs to the caller.
pub struct Dispatcher<'a> {
    toolset: &'a dyn Toolset,
    action_ids: &'a ActionIdMap,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over the given toolset and its inventory.
    #[must_use]
    pub fn new(toolset: &'a dyn Toolset, action_ids: &'a ActionIdMap) -> Self {
        Self {
            toolset,
            action_ids,
        }
    }

    /// Executes `action` with the prepared parameters.
    ///
    /// A missing inventory entry is catalog/provider drift, reported as
    /// [`EngineError::ConfigurationMismatch`] rather than a user error.
    /// Transport failures are wrapped with the action's display name.
    pub fn dispatch(
        &self,
        action: &ActionSpec,
        params: &Map<String, Value>,
    ) -> Result<RawResult, EngineError> {
        let Some(action_id) = self.action_ids.get(&action.key) else {
            warn!(
                action_key = %action.key,
                "catalog action missing from toolset inventory"
            );
            return Err(EngineError::ConfigurationMismatch {
                action_key: action.key.clone(),
            });
        };
        debug!(action_key = %action.key, action_id, "dispatching action");
        self.toolset
            .execute_action(action_id, params)
            .map_err(|err| EngineError::Transport {
                display_name: action.name.clone(),
                message: err.message,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::toolset::{MockToolset, ToolsetError};

    fn action() -> ActionSpec {
        ActionSpec::new("REDDIT_GET_USER_FLAIR", "Get User Flair")
    }

    #[test]
    fn inventory_miss_is_configuration_mismatch() {
        let toolset = MockToolset::new();
        let ids = ActionIdMap::new();
        let dispatcher = Dispatcher::new(&toolset, &ids);

        let err = dispatcher.dispatch(&action(), &Map::new()).unwrap_err();
        assert_eq!(err.code(), "ENGINE_CONFIGURATION_MISMATCH");
    }

    #[test]
    fn transport_failure_carries_display_name() {
        let mut toolset = MockToolset::new();
        toolset
            .expect_execute_action()
            .returning(|_, _| Err(ToolsetError::new("connection reset")));
        let ids = ActionIdMap::identity(["REDDIT_GET_USER_FLAIR"]);
        let dispatcher = Dispatcher::new(&toolset, &ids);

        let err = dispatcher.dispatch(&action(), &Map::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to execute Get User Flair: connection reset"
        );
    }

    #[test]
    fn successful_dispatch_returns_raw_envelope() {
        let mut toolset = MockToolset::new();
        toolset
            .expect_execute_action()
            .withf(|id, params| id == "flair-v2" && params.is_empty())
            .returning(|_, _| Ok(RawResult::success(json!({"flair_list": []}))));
        let ids = ActionIdMap::new().with("REDDIT_GET_USER_FLAIR", "flair-v2");
        let dispatcher = Dispatcher::new(&toolset, &ids);

        let raw = dispatcher.dispatch(&action(), &Map::new()).unwrap();
        assert!(raw.successful);
        assert_eq!(raw.data, json!({"flair_list": []}));
    }
}
