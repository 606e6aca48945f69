//! Building toolset call parameters from stored field values.

use serde_json::{Map, Value};

use toolbridge_catalog::action::ActionSpec;
use toolbridge_catalog::app::App;
use toolbridge_catalog::field::FieldKind;
use toolbridge_catalog::values::FieldValues;

/// Truthiness of a JSON value, matching dynamic-language boolean casts.
///
/// Non-empty strings are truthy regardless of content, so `"0"` and
/// `"false"` both convert to `true`.
#[must_use]
pub fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Assembles the parameter map for one action call.
///
/// Fields whose stored value is absent, `null`, or the empty string are
/// omitted entirely, required or not; the remote service reports missing
/// required parameters itself. Keys are the field keys with the
/// `<ACTION_KEY>_` prefix stripped.
#[must_use]
pub fn build_params(app: &App, action: &ActionSpec, values: &FieldValues) -> Map<String, Value> {
    let mut params = Map::new();
    for field_key in &action.fields {
        let Some(field) = app.field(field_key) else {
            continue;
        };
        let Some(value) = values.get(field_key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if value.as_str().is_some_and(str::is_empty) {
            continue;
        }
        let name = field.bare_name(&action.key).to_owned();
        let value = match field.kind {
            FieldKind::CommaList => split_comma_list(value),
            FieldKind::Boolean => Value::Bool(json_truthy(value)),
            FieldKind::Text | FieldKind::Integer => value.clone(),
        };
        params.insert(name, value);
    }
    params
}

/// Splits a comma-separated string into a trimmed list.
///
/// Empty elements are kept, so `"a,,b"` yields three entries. Values that
/// already arrive as arrays pass through unchanged.
fn split_comma_list(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::Array(
            s.split(',')
                .map(|item| Value::String(item.trim().to_owned()))
                .collect(),
        ),
        other => other.clone(),
    }
}
