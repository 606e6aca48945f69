use serde::{Deserialize, Serialize};

/// The kind of a field, determining its UI widget and value coercion.
///
/// Kinds map one-to-one onto the input widgets the host editor renders
/// and onto the coercions the parameter builder applies before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form text. Sent verbatim.
    Text,
    /// Integer input. Sent verbatim (the editor already holds a number).
    Integer,
    /// Checkbox. Coerced with a truthy cast before dispatch.
    Boolean,
    /// Text input holding comma-separated values. Split and trimmed
    /// into a string array before dispatch.
    CommaList,
}

impl FieldKind {
    /// String identifier for serialization/logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::CommaList => "comma_list",
        }
    }

    /// Whether the builder applies a truthy cast to this kind.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Whether the builder splits this kind on commas.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::CommaList)
    }

    /// The JSON value type this field produces after coercion.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "number",
            Self::Boolean => "boolean",
            Self::CommaList => "array",
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Text
    }
}

/// A typed field descriptor, unique within its app.
///
/// Field keys are conventionally prefixed with the action key that
/// introduced them (`<ACTION_KEY>_<param>`): the same bare parameter
/// name may need different help text or semantics under different
/// actions, so each action gets its own field entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Unique key within the owning app (e.g. `REDDIT_CREATE_REDDIT_POST_title`).
    pub key: String,

    /// Human-readable display name (e.g. `"Title"`).
    pub name: String,

    /// Help text shown next to the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Value kind, driving widget choice and builder coercion.
    #[serde(default)]
    pub kind: FieldKind,

    /// Whether the user must provide a value. Enforced by the host UI,
    /// not by the parameter builder.
    #[serde(default)]
    pub required: bool,

    /// Default value pre-filled when the field is first shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Whether the field is currently visible. Fields start hidden and
    /// are shown only while their owning action is selected.
    #[serde(default)]
    pub visible: bool,
}

impl FieldDef {
    /// Create a text field with the required key and display name.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            help: None,
            kind: FieldKind::Text,
            required: false,
            default: None,
            visible: false,
        }
    }

    /// Set the field kind.
    #[must_use]
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Strip the given action-key prefix to obtain the bare parameter
    /// name the external API expects. Returns the full key when the
    /// prefix does not match.
    #[must_use]
    pub fn bare_name<'a>(&'a self, action_key: &str) -> &'a str {
        self.key
            .strip_prefix(action_key)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn new_sets_key_and_name() {
        let field = FieldDef::new("REDDIT_CREATE_REDDIT_POST_title", "Title");
        assert_eq!(field.key, "REDDIT_CREATE_REDDIT_POST_title");
        assert_eq!(field.name, "Title");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(!field.required);
        assert!(!field.visible);
        assert!(field.help.is_none());
        assert!(field.default.is_none());
    }

    #[test]
    fn builder_chaining() {
        let field = FieldDef::new("X_limit", "Limit")
            .with_kind(FieldKind::Integer)
            .with_help("Maximum number of results.")
            .with_default(json!(5))
            .required();

        assert_eq!(field.kind, FieldKind::Integer);
        assert_eq!(field.help.as_deref(), Some("Maximum number of results."));
        assert_eq!(field.default, Some(json!(5)));
        assert!(field.required);
    }

    #[test]
    fn bare_name_strips_action_prefix() {
        let field = FieldDef::new("REDDIT_CREATE_REDDIT_POST_title", "Title");
        assert_eq!(field.bare_name("REDDIT_CREATE_REDDIT_POST"), "title");
    }

    #[test]
    fn bare_name_keeps_interior_underscores() {
        let field = FieldDef::new("GOOGLETASKS_DELETE_TASK_task_id", "Task Id");
        assert_eq!(field.bare_name("GOOGLETASKS_DELETE_TASK"), "task_id");
    }

    #[test]
    fn bare_name_falls_back_on_mismatch() {
        let field = FieldDef::new("unprefixed_field", "Field");
        assert_eq!(field.bare_name("REDDIT_CREATE_REDDIT_POST"), "unprefixed_field");
    }

    #[test]
    fn kind_as_str_round_trips_through_serde() {
        let kinds = [
            FieldKind::Text,
            FieldKind::Integer,
            FieldKind::Boolean,
            FieldKind::CommaList,
        ];

        for kind in &kinds {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));

            let back: FieldKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, back);
        }
    }

    #[test]
    fn kind_predicates() {
        assert!(FieldKind::Boolean.is_boolean());
        assert!(!FieldKind::Boolean.is_list());
        assert!(FieldKind::CommaList.is_list());
        assert!(!FieldKind::Text.is_boolean());
        assert!(!FieldKind::Integer.is_list());
    }

    #[test]
    fn value_types_are_valid() {
        let valid = ["string", "number", "boolean", "array"];
        for kind in [
            FieldKind::Text,
            FieldKind::Integer,
            FieldKind::Boolean,
            FieldKind::CommaList,
        ] {
            assert!(valid.contains(&kind.value_type()));
        }
    }

    #[test]
    fn serde_round_trip_field() {
        let field = FieldDef::new("X_restrict_sr", "Restrict Sr")
            .with_kind(FieldKind::Boolean)
            .with_default(json!(true));

        let json_str = serde_json::to_string(&field).unwrap();
        assert!(json_str.contains("\"kind\":\"boolean\""));

        let back: FieldDef = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, field);
    }
}
