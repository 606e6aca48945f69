//! The invocation boundary: resolve, build, dispatch, normalize.

use tracing::{debug, error};

use toolbridge_catalog::app::App;
use toolbridge_catalog::values::FieldValues;

use crate::dispatch::Dispatcher;
use crate::error::EngineError;
use crate::normalize::{normalize, Outcome};
use crate::params::build_params;
use crate::resolver::{ActionResolver, ActionSelection};
use crate::toolset::{ActionIdMap, Toolset};

/// Runs one cataloged action end to end.
///
/// Remote failures come back as [`Outcome::Failure`] so the host workflow
/// can branch on them; everything that prevented the call from completing
/// is an [`EngineError`].
pub struct Invoker<'a> {
    app: &'a App,
    resolver: ActionResolver<'a>,
    dispatcher: Dispatcher<'a>,
}

impl<'a> Invoker<'a> {
    /// Creates an invoker for `app` over the given toolset.
    #[must_use]
    pub fn new(app: &'a App, toolset: &'a dyn Toolset, action_ids: &'a ActionIdMap) -> Self {
        Self {
            app,
            resolver: ActionResolver::new(app),
            dispatcher: Dispatcher::new(toolset, action_ids),
        }
    }

    /// Executes the selected action with the current field values.
    ///
    /// One blocking call, no retries. Payload-shape defects discovered
    /// after the call are re-raised as [`EngineError::Transport`] carrying
    /// the action's display name, so the host sees one uniform error type
    /// for anything that went wrong past resolution.
    pub fn invoke(
        &self,
        selection: &ActionSelection,
        values: &FieldValues,
    ) -> Result<Outcome, EngineError> {
        let action = self.resolver.resolve(selection).inspect_err(|err| {
            error!(app = %self.app.name, %err, "action resolution failed");
        })?;
        debug!(app = %self.app.name, action_key = %action.key, "resolved action");

        let params = build_params(self.app, action, values);
        let raw = self.dispatcher.dispatch(action, &params).inspect_err(|err| {
            error!(app = %self.app.name, action_key = %action.key, %err, "dispatch failed");
        })?;

        normalize(&raw, action, self.app.extraction_mode).map_err(|err| {
            error!(app = %self.app.name, action_key = %action.key, %err, "normalization failed");
            EngineError::Transport {
                display_name: action.name.clone(),
                message: err.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use toolbridge_catalog::apps;

    use crate::toolset::{MockToolset, RawResult};

    #[test]
    fn remote_failure_is_data_not_error() {
        let app = apps::discordbot::app();
        let mut toolset = MockToolset::new();
        toolset
            .expect_execute_action()
            .returning(|_, _| Ok(RawResult::failure(json!({}))));
        let ids = ActionIdMap::identity(app.actions.keys().cloned());
        let invoker = Invoker::new(&app, &toolset, &ids);

        let outcome = invoker
            .invoke(&ActionSelection::from("Retrieve user by id"), &FieldValues::new())
            .unwrap();
        assert_eq!(outcome.into_value(), json!({"error": "No response"}));
    }

    #[test]
    fn shape_defects_surface_as_uniform_transport_error() {
        use toolbridge_catalog::action::{ActionSpec, ResultExtraction};
        use toolbridge_catalog::app::App;
        use toolbridge_catalog::extract::ExtractionMode;

        let app = App::new("sample", "Sample")
            .with_extraction_mode(ExtractionMode::SingleKeyUnwrap)
            .with_action(
                ActionSpec::new("SAMPLE_FETCH", "Fetch").with_extract(ResultExtraction::unnamed()),
            );
        let mut toolset = MockToolset::new();
        toolset
            .expect_execute_action()
            .returning(|_, _| Ok(RawResult::success(json!({"a": 1, "b": 2}))));
        let ids = ActionIdMap::identity(["SAMPLE_FETCH"]);
        let invoker = Invoker::new(&app, &toolset, &ids);

        let err = invoker
            .invoke(&ActionSelection::from("Fetch"), &FieldValues::new())
            .unwrap_err();
        assert_eq!(err.code(), "ENGINE_TRANSPORT");
        assert!(err.to_string().starts_with("Failed to execute Fetch:"));
    }
}
