//! Mapping from the user-facing action selector to catalog entries.
//!
//! The workflow surface stores the selected action either as a bare display
//! name or as a list of option objects, depending on how the frontend
//! serialized the selector. [`ActionSelection`] accepts both shapes and
//! [`ActionResolver`] turns the chosen display name back into a catalog key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use toolbridge_catalog::action::ActionSpec;
use toolbridge_catalog::app::App;

use crate::error::EngineError;

/// One entry of a serialized selector option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedChoice {
    /// Display name of the option.
    pub name: String,
}

/// The action selector value as received from the workflow surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionSelection {
    /// Nothing selected yet.
    None,
    /// A bare display name.
    Name(String),
    /// A list of option objects; the first entry is the selection.
    Choices(Vec<NamedChoice>),
}

impl Default for ActionSelection {
    fn default() -> Self {
        Self::None
    }
}

impl ActionSelection {
    /// The display name this selection refers to, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Name(name) => Some(name),
            Self::Choices(choices) => choices.first().map(|c| c.name.as_str()),
        }
    }
}

impl From<&str> for ActionSelection {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

/// Resolves display names back to catalog action keys for one app.
#[derive(Debug, Clone)]
pub struct ActionResolver<'a> {
    app: &'a App,
    by_display_name: IndexMap<&'a str, &'a str>,
}

impl<'a> ActionResolver<'a> {
    /// Builds the inverse display-name index for `app`.
    ///
    /// Duplicate display names are resolved last-write-wins, matching the
    /// catalog's declaration order.
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        let mut by_display_name: IndexMap<&str, &str> = IndexMap::new();
        for (key, action) in &app.actions {
            if let Some(previous) = by_display_name.insert(action.name.as_str(), key.as_str()) {
                debug!(
                    app = %app.name,
                    display_name = %action.name,
                    previous_key = %previous,
                    key = %key,
                    "duplicate display name in catalog, keeping the later entry"
                );
            }
        }
        Self {
            app,
            by_display_name,
        }
    }

    /// Looks up the catalog key for `display_name`.
    ///
    /// Strictly the inverse of the catalog's `key -> display name` map;
    /// anything else, a raw catalog key included, is an invalid action.
    pub fn key_for(&self, display_name: &str) -> Result<&'a str, EngineError> {
        self.by_display_name
            .get(display_name)
            .copied()
            .ok_or_else(|| EngineError::InvalidAction {
                display_name: display_name.to_owned(),
            })
    }

    /// Resolves a selector value to its catalog action.
    pub fn resolve(&self, selection: &ActionSelection) -> Result<&'a ActionSpec, EngineError> {
        let display_name = selection
            .display_name()
            .ok_or_else(|| EngineError::InvalidAction {
                display_name: "None".to_owned(),
            })?;
        let key = self.key_for(display_name)?;
        Ok(&self.app.actions[key])
    }

    /// Selector options for every cataloged action, in declaration order.
    #[must_use]
    pub fn choices(&self) -> Vec<NamedChoice> {
        self.app
            .actions
            .values()
            .map(|action| NamedChoice {
                name: action.name.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use toolbridge_catalog::apps;

    fn reddit() -> App {
        apps::reddit::app()
    }

    #[test]
    fn selection_deserializes_from_bare_string() {
        let selection: ActionSelection = serde_json::from_value(json!("Create Post")).unwrap();
        assert_eq!(selection.display_name(), Some("Create Post"));
    }

    #[test]
    fn selection_deserializes_from_choice_list() {
        let selection: ActionSelection =
            serde_json::from_value(json!([{ "name": "Retrieve Reddit Post" }])).unwrap();
        assert_eq!(selection.display_name(), Some("Retrieve Reddit Post"));
    }

    #[test]
    fn selection_deserializes_from_null() {
        let selection: ActionSelection = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(selection.display_name(), None);
    }

    #[test]
    fn resolves_display_name_to_key() {
        let app = reddit();
        let resolver = ActionResolver::new(&app);
        assert_eq!(
            resolver.key_for("Create Reddit Post").unwrap(),
            "REDDIT_CREATE_REDDIT_POST"
        );
    }

    #[test]
    fn raw_keys_are_not_valid_selections() {
        let app = reddit();
        let resolver = ActionResolver::new(&app);
        let err = resolver.key_for("REDDIT_CREATE_REDDIT_POST").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid action: REDDIT_CREATE_REDDIT_POST"
        );
    }

    #[test]
    fn empty_selection_is_reported_as_none() {
        let app = reddit();
        let resolver = ActionResolver::new(&app);
        let err = resolver.resolve(&ActionSelection::None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid action: None");
    }

    #[test]
    fn unknown_display_name_is_invalid() {
        let app = reddit();
        let resolver = ActionResolver::new(&app);
        let err = resolver.key_for("Nonexistent Action").unwrap_err();
        assert_eq!(err.to_string(), "Invalid action: Nonexistent Action");
    }

    #[test]
    fn resolve_inverts_display_names_for_every_builtin_action() {
        for (_, app) in apps::builtin().iter() {
            let resolver = ActionResolver::new(app);
            for (key, action) in &app.actions {
                assert_eq!(resolver.key_for(&action.name).unwrap(), key, "{key}");
            }
        }
    }

    #[test]
    fn choices_follow_declaration_order() {
        let app = reddit();
        let resolver = ActionResolver::new(&app);
        let names: Vec<_> = resolver.choices().into_iter().map(|c| c.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Create Reddit Post"));
        assert_eq!(names.len(), app.actions.len());
    }
}
