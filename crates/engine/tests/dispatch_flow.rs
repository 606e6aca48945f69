//! End-to-end invocation flow against the builtin catalogs.

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

use toolbridge_catalog::apps;
use toolbridge_catalog::values::FieldValues;
use toolbridge_engine::prelude::*;

/// Toolset double that records every call and replays a fixed response.
struct RecordingToolset {
    response: RawResult,
    calls: RefCell<Vec<(String, Map<String, Value>)>>,
}

impl RecordingToolset {
    fn new(response: RawResult) -> Self {
        Self {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Map<String, Value>)> {
        self.calls.borrow().clone()
    }
}

impl Toolset for RecordingToolset {
    fn execute_action(
        &self,
        action_id: &str,
        params: &Map<String, Value>,
    ) -> Result<RawResult, ToolsetError> {
        self.calls
            .borrow_mut()
            .push((action_id.to_owned(), params.clone()));
        Ok(self.response.clone())
    }
}

// ── end-to-end scenarios ────────────────────────────────────────────────

#[test]
fn create_reddit_post_builds_params_and_dispatches() {
    let app = apps::reddit::app();
    let toolset = RecordingToolset::new(RawResult::success(json!({
        "items": [{"id": "t3_new"}]
    })));
    let ids = ActionIdMap::identity(app.actions.keys().cloned());
    let invoker = Invoker::new(&app, &toolset, &ids);

    let values = FieldValues::new()
        .with("REDDIT_CREATE_REDDIT_POST_title", json!("Hi"))
        .with("REDDIT_CREATE_REDDIT_POST_subreddit", json!("test"))
        .with("REDDIT_CREATE_REDDIT_POST_kind", json!("self"))
        .with("REDDIT_CREATE_REDDIT_POST_text", json!("body"))
        .with("REDDIT_CREATE_REDDIT_POST_flair_id", json!(""))
        .with("REDDIT_CREATE_REDDIT_POST_url", json!(null));

    let outcome = invoker
        .invoke(&ActionSelection::from("Create Reddit Post"), &values)
        .unwrap();

    let calls = toolset.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "REDDIT_CREATE_REDDIT_POST");
    assert_eq!(
        Value::Object(calls[0].1.clone()),
        json!({
            "title": "Hi",
            "subreddit": "test",
            "kind": "self",
            "text": "body",
        })
    );
    assert_eq!(outcome.into_value(), json!([{"id": "t3_new"}]));
}

#[test]
fn unknown_display_name_is_invalid_action() {
    let app = apps::reddit::app();
    let toolset = RecordingToolset::new(RawResult::success(Value::Null));
    let ids = ActionIdMap::identity(app.actions.keys().cloned());
    let invoker = Invoker::new(&app, &toolset, &ids);

    let err = invoker
        .invoke(&ActionSelection::from("Nonexistent Action"), &FieldValues::new())
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid action: Nonexistent Action");
    assert!(toolset.calls().is_empty());
}

#[test]
fn raw_catalog_key_selection_is_invalid_action() {
    let app = apps::reddit::app();
    let toolset = RecordingToolset::new(RawResult::success(Value::Null));
    let ids = ActionIdMap::identity(app.actions.keys().cloned());
    let invoker = Invoker::new(&app, &toolset, &ids);

    let err = invoker
        .invoke(
            &ActionSelection::from("REDDIT_CREATE_REDDIT_POST"),
            &FieldValues::new(),
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid action: REDDIT_CREATE_REDDIT_POST"
    );
    assert!(toolset.calls().is_empty());
}

#[test]
fn remote_failure_routes_back_as_error_payload() {
    let app = apps::googledrive::app();
    let toolset = RecordingToolset::new(RawResult::failure(json!({
        "message": "{\"error\": {\"code\": 404, \"message\": \"file not found\"}}"
    })));
    let ids = ActionIdMap::identity(app.actions.keys().cloned());
    let invoker = Invoker::new(&app, &toolset, &ids);

    let values = FieldValues::new().with("GOOGLEDRIVE_DOWNLOAD_FILE_file_id", json!("abc"));
    let outcome = invoker
        .invoke(
            &ActionSelection::from("Download A File From Google Drive"),
            &values,
        )
        .unwrap();

    assert_eq!(
        outcome.into_value(),
        json!({"error": {"code": 404, "message": "file not found"}})
    );
}

#[test]
fn catalog_drift_is_not_a_user_error() {
    let app = apps::googletasks::app();
    let toolset = RecordingToolset::new(RawResult::success(Value::Null));
    let ids = ActionIdMap::new();
    let invoker = Invoker::new(&app, &toolset, &ids);

    let err = invoker
        .invoke(&ActionSelection::from("List Tasks"), &FieldValues::new())
        .unwrap_err();

    assert_eq!(err.code(), "ENGINE_CONFIGURATION_MISMATCH");
    assert!(!err.is_user_error());
    assert!(toolset.calls().is_empty());
}

#[test]
fn list_selection_shape_resolves_like_a_bare_string() {
    let app = apps::discordbot::app();
    let toolset = RecordingToolset::new(RawResult::success(json!({"id": "42"})));
    let ids = ActionIdMap::identity(app.actions.keys().cloned());
    let invoker = Invoker::new(&app, &toolset, &ids);

    let selection: ActionSelection =
        serde_json::from_value(json!([{ "name": "Retrieve user by id" }])).unwrap();
    let values = FieldValues::new().with("DISCORDBOT_GET_USER_user_id", json!("42"));

    let outcome = invoker.invoke(&selection, &values).unwrap();

    // Discord responses pass through verbatim.
    assert_eq!(outcome.into_value(), json!({"id": "42"}));
}
