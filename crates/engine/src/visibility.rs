//! Field visibility for the workflow configuration surface.
//!
//! The host UI holds one flat bag of every field across every action of an
//! app. Whenever the action selector changes, the surface asks the engine
//! which fields to show. The answer is a pure function of the catalog and
//! the current selection, so applying it twice changes nothing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use toolbridge_catalog::app::App;

use crate::resolver::{ActionResolver, ActionSelection, NamedChoice};

/// Display state of one configurable field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    /// Whether the surface should render this field.
    pub show: bool,
    /// The current user-entered value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// The engine-owned slice of the surface's configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Options offered by the action selector.
    pub action_options: Vec<NamedChoice>,
    /// Per-field display state, keyed by full field key.
    pub fields: IndexMap<String, FieldState>,
}

impl BuildConfig {
    /// An initial configuration for `app`: every field present and hidden,
    /// seeded with its catalog default.
    #[must_use]
    pub fn for_app(app: &App) -> Self {
        let fields = app
            .fields
            .iter()
            .map(|(key, field)| {
                (
                    key.clone(),
                    FieldState {
                        show: false,
                        value: field.default.clone(),
                    },
                )
            })
            .collect();
        Self {
            action_options: ActionResolver::new(app).choices(),
            fields,
        }
    }
}

/// Recomputes visibility after the action selection changed.
///
/// Only the selected action's fields are shown; everything else is hidden.
/// An unresolved or empty selection hides every field. Selector options are
/// re-derived from the catalog on every call. Stored values are left alone.
pub fn apply_visibility(app: &App, selection: &ActionSelection, config: &mut BuildConfig) {
    let resolver = ActionResolver::new(app);
    config.action_options = resolver.choices();

    let shown = resolver
        .resolve(selection)
        .map(|action| action.fields.clone())
        .unwrap_or_default();

    for (key, field) in &app.fields {
        let show = shown.iter().any(|f| f == key);
        let state = config.fields.entry(key.clone()).or_insert_with(|| FieldState {
            show: false,
            value: field.default.clone(),
        });
        state.show = show;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use toolbridge_catalog::apps;

    #[test]
    fn initial_config_hides_everything_and_seeds_defaults() {
        let app = apps::reddit::app();
        let config = BuildConfig::for_app(&app);
        assert!(config.fields.values().all(|state| !state.show));
        assert_eq!(
            config.fields["REDDIT_SEARCH_ACROSS_SUBREDDITS_limit"].value,
            Some(json!(5))
        );
        assert_eq!(config.action_options.len(), app.actions.len());
    }

    #[test]
    fn selecting_an_action_shows_exactly_its_fields() {
        let app = apps::reddit::app();
        let mut config = BuildConfig::for_app(&app);
        let selection = ActionSelection::from("Create Reddit Post");

        apply_visibility(&app, &selection, &mut config);

        let action = app.action("REDDIT_CREATE_REDDIT_POST").unwrap();
        for (key, state) in &config.fields {
            assert_eq!(state.show, action.fields.contains(key), "{key}");
        }
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let app = apps::googledrive::app();
        let mut config = BuildConfig::for_app(&app);
        let selection = ActionSelection::from("Find Files");

        apply_visibility(&app, &selection, &mut config);
        let once = config.clone();
        apply_visibility(&app, &selection, &mut config);

        assert_eq!(config, once);
    }

    #[test]
    fn unresolved_selection_hides_every_field() {
        let app = apps::reddit::app();
        let mut config = BuildConfig::for_app(&app);

        apply_visibility(&app, &ActionSelection::from("Create Reddit Post"), &mut config);
        apply_visibility(&app, &ActionSelection::None, &mut config);

        assert!(config.fields.values().all(|state| !state.show));
    }
}
