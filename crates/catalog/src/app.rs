use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::action::ActionSpec;
use crate::error::CatalogError;
use crate::extract::ExtractionMode;
use crate::field::FieldDef;

/// One third-party integration surfaced through the dispatch engine.
///
/// An `App` owns exactly one action catalog and one field registry,
/// both keyed and iteration-ordered by declaration. It is immutable
/// after load; the only runtime mutation anywhere in the system is
/// field visibility, which lives in the engine's build config, not
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Canonical app name (e.g. `"reddit"`, `"googledrive"`).
    pub name: String,

    /// Human-readable display name (e.g. `"Reddit"`).
    pub display_name: String,

    /// Icon reference for the host editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Documentation URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Action catalog, keyed by action key, in declaration order.
    pub actions: IndexMap<String, ActionSpec>,

    /// Field registry: the union of every field any action lists.
    pub fields: IndexMap<String, FieldDef>,

    /// Success-payload policy for this app's actions.
    #[serde(default)]
    pub extraction_mode: ExtractionMode,

    /// Action keys pre-selected when the app is first configured.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_actions: Vec<String>,
}

impl App {
    /// Create an app with the required name and display name.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            icon: None,
            documentation: None,
            actions: IndexMap::new(),
            fields: IndexMap::new(),
            extraction_mode: ExtractionMode::default(),
            default_actions: Vec::new(),
        }
    }

    /// Set the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the documentation URL.
    #[must_use]
    pub fn with_documentation(mut self, url: impl Into<String>) -> Self {
        self.documentation = Some(url.into());
        self
    }

    /// Add an action to the catalog. Re-adding a key replaces the
    /// earlier entry (last-write-wins, matching the source tables).
    #[must_use]
    pub fn with_action(mut self, action: ActionSpec) -> Self {
        self.actions.insert(action.key.clone(), action);
        self
    }

    /// Add a field to the registry. Last-write-wins on duplicate keys.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.insert(field.key.clone(), field);
        self
    }

    /// Set the success-payload extraction policy.
    #[must_use]
    pub fn with_extraction_mode(mut self, mode: ExtractionMode) -> Self {
        self.extraction_mode = mode;
        self
    }

    /// Add a pre-selected default action.
    #[must_use]
    pub fn with_default_action(mut self, action_key: impl Into<String>) -> Self {
        self.default_actions.push(action_key.into());
        self
    }

    /// Look up an action by key.
    #[must_use]
    pub fn action(&self, key: &str) -> Option<&ActionSpec> {
        self.actions.get(key)
    }

    /// Look up a field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        self.fields.get(key)
    }

    /// Verify the catalog/registry consistency invariant: every field
    /// key listed by every action exists in the field registry, and
    /// every default action exists in the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for action in self.actions.values() {
            for field_key in &action.fields {
                if !self.fields.contains_key(field_key) {
                    return Err(CatalogError::UnknownField {
                        action_key: action.key.clone(),
                        field_key: field_key.clone(),
                    });
                }
            }
        }
        for default in &self.default_actions {
            if !self.actions.contains_key(default) {
                return Err(CatalogError::UnknownDefaultAction {
                    action_key: default.clone(),
                });
            }
        }
        Ok(())
    }

    /// Sanitized identifiers of the pre-selected actions: the display
    /// name of each default action with whitespace replaced by `-`.
    #[must_use]
    pub fn default_tools(&self) -> BTreeSet<String> {
        self.default_actions
            .iter()
            .filter_map(|key| self.actions.get(key))
            .map(|action| sanitize_tool_name(&action.name))
            .collect()
    }
}

/// Replace every whitespace character with `-`.
#[must_use]
pub fn sanitize_tool_name(display_name: &str) -> String {
    display_name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
