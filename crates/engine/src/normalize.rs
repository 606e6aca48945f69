//! Re-shaping raw toolset envelopes into workflow-facing results.
//!
//! Failure payloads arrive in several shapes, sometimes with a JSON object
//! string-encoded inside `data.message`. The shapes are decoded once into
//! [`RawMessage`] and re-emitted as a uniform `{"error": ...}` object.
//! Success payloads go through the app's configured [`ExtractionMode`].

use serde_json::{json, Value};
use tracing::debug;

use toolbridge_catalog::action::ActionSpec;
use toolbridge_catalog::extract::ExtractionMode;

use crate::error::EngineError;
use crate::toolset::RawResult;

/// The decoded form of a failure envelope's `data.message` field.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMessage {
    /// A plain string that did not decode to a structured error.
    PlainString(String),
    /// An object carrying an `error` sub-object.
    ErrorObject {
        /// Provider error code, absent when the provider omitted it.
        code: Option<Value>,
        /// Provider error message, absent when the provider omitted it.
        message: Option<Value>,
    },
    /// Anything else, including an absent message.
    Other(Value),
}

impl RawMessage {
    /// Decodes `data.message`, parsing string-encoded JSON when present.
    #[must_use]
    pub fn decode(message: &Value) -> Self {
        match message {
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(parsed) => match Self::from_object(&parsed) {
                    Some(decoded) => decoded,
                    None => Self::PlainString(text.clone()),
                },
                Err(_) => Self::PlainString(text.clone()),
            },
            other => match Self::from_object(other) {
                Some(decoded) => decoded,
                None => Self::Other(other.clone()),
            },
        }
    }

    fn from_object(value: &Value) -> Option<Self> {
        let error = value.as_object()?.get("error")?;
        let details = error.as_object()?;
        Some(Self::ErrorObject {
            code: details.get("code").cloned(),
            message: details.get("message").cloned(),
        })
    }
}

/// A normalized remote-side failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// The provider returned a structured error object.
    Structured {
        /// Provider error code, `"Unknown"` when omitted.
        code: Value,
        /// Provider error message, `"No error message"` when omitted.
        message: Value,
    },
    /// Only a plain message is available.
    Message(String),
}

impl RemoteError {
    /// The workflow-facing `{"error": ...}` object for this failure.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Structured { code, message } => json!({
                "error": { "code": code, "message": message }
            }),
            Self::Message(text) => json!({ "error": text }),
        }
    }
}

/// The outcome of a normalized action call.
///
/// Remote failures are data, not errors: the action ran and the provider
/// said no, which is a routable workflow branch rather than a defect.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action succeeded; holds the (possibly extracted) payload.
    Success(Value),
    /// The provider reported a failure.
    Failure(RemoteError),
}

impl Outcome {
    /// The JSON value the workflow surface receives.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => error.to_value(),
        }
    }
}

/// Normalizes a raw envelope for `action` under the app's extraction mode.
pub fn normalize(
    raw: &RawResult,
    action: &ActionSpec,
    mode: ExtractionMode,
) -> Result<Outcome, EngineError> {
    if !raw.successful {
        return Ok(Outcome::Failure(normalize_failure(raw)));
    }
    let data = &raw.data;
    if mode == ExtractionMode::None {
        return Ok(Outcome::Success(data.clone()));
    }
    if action.wants_extraction() {
        if let Some(field) = action.result_field() {
            if let Some(found) = find_key(data, field) {
                if !is_empty_container(found) {
                    return Ok(Outcome::Success(found.clone()));
                }
            }
            debug!(
                action_key = %action.key,
                result_field = field,
                "result field missing or empty, falling back to raw data"
            );
        } else if mode == ExtractionMode::SingleKeyUnwrap {
            return single_key_check(data, action);
        }
    }
    Ok(Outcome::Success(fallback(data, mode)))
}

fn normalize_failure(raw: &RawResult) -> RemoteError {
    let message = raw
        .data
        .as_object()
        .and_then(|data| data.get("message"))
        .map(RawMessage::decode);
    match message {
        Some(RawMessage::ErrorObject { code, message }) => RemoteError::Structured {
            code: code.unwrap_or_else(|| json!("Unknown")),
            message: message.unwrap_or_else(|| json!("No error message")),
        },
        Some(RawMessage::PlainString(text)) => RemoteError::Message(text),
        Some(RawMessage::Other(_)) | None => RemoteError::Message(
            raw.error.clone().unwrap_or_else(|| "No response".to_owned()),
        ),
    }
}

/// Depth-first search for the first occurrence of `key` in the payload.
fn find_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data {
        Value::Object(map) => {
            if let Some(found) = map.get(key) {
                return Some(found);
            }
            map.values().find_map(|value| find_key(value, key))
        }
        Value::Array(items) => items.iter().find_map(|item| find_key(item, key)),
        _ => None,
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

/// Extraction was requested without a field name: the payload must hold
/// exactly one entry and is returned as-is.
fn single_key_check(data: &Value, action: &ActionSpec) -> Result<Outcome, EngineError> {
    let len = match data {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 0,
    };
    if len != 1 {
        let keys = match data {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };
        return Err(EngineError::UnexpectedShape {
            action_key: action.key.clone(),
            keys,
        });
    }
    Ok(Outcome::Success(data.clone()))
}

fn fallback(data: &Value, mode: ExtractionMode) -> Value {
    if mode == ExtractionMode::RecursiveSearch {
        if let Some(map) = data.as_object() {
            if let Some(first) = map.values().next() {
                return Value::Array(vec![first.clone()]);
            }
        }
    }
    data.clone()
}
