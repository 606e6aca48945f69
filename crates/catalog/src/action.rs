use serde::{Deserialize, Serialize};

/// Directive to pull a named sub-value out of a nested success payload
/// instead of returning the payload verbatim.
///
/// What happens when the named field is absent from the payload is
/// decided by the owning app's [`ExtractionMode`](crate::ExtractionMode),
/// not by this directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultExtraction {
    /// Whether extraction is requested for this action.
    pub enabled: bool,

    /// The payload key to extract. May be absent even when extraction
    /// is enabled; that combination is meaningful under the strict
    /// single-key-unwrap policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

impl ResultExtraction {
    /// Extraction of the given payload key.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            enabled: true,
            field_name: Some(name.into()),
        }
    }

    /// Extraction enabled with no named field. Under the strict policy
    /// this asserts the payload is a single-key object.
    #[must_use]
    pub fn unnamed() -> Self {
        Self {
            enabled: true,
            field_name: None,
        }
    }
}

/// One invocable operation within an app.
///
/// The key is globally unique by convention (`<APP>_<VERB>_<NOUN>`) and
/// doubles as the prefix shared by this action's field keys. The field
/// list is ordered; the parameter builder walks it in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Globally unique action key (e.g. `REDDIT_CREATE_REDDIT_POST`).
    pub key: String,

    /// User-facing display name, unique within the app
    /// (e.g. `"Create Reddit Post"`).
    pub name: String,

    /// Ordered keys of the fields this action consumes. Every entry
    /// must exist in the owning app's field registry.
    pub fields: Vec<String>,

    /// Optional result-extraction directive for success payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<ResultExtraction>,
}

impl ActionSpec {
    /// Create an action with the required key and display name.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            fields: Vec::new(),
            extract: None,
        }
    }

    /// Append a field key (builder-style, consuming).
    #[must_use]
    pub fn with_field(mut self, field_key: impl Into<String>) -> Self {
        self.fields.push(field_key.into());
        self
    }

    /// Append several field keys at once.
    #[must_use]
    pub fn with_fields<I, S>(mut self, field_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(field_keys.into_iter().map(Into::into));
        self
    }

    /// Set the result-extraction directive.
    #[must_use]
    pub fn with_extract(mut self, extract: ResultExtraction) -> Self {
        self.extract = Some(extract);
        self
    }

    /// The extraction field name, when extraction is enabled and named.
    #[must_use]
    pub fn result_field(&self) -> Option<&str> {
        self.extract
            .as_ref()
            .filter(|e| e.enabled)
            .and_then(|e| e.field_name.as_deref())
    }

    /// Whether result extraction is requested at all.
    #[must_use]
    pub fn wants_extraction(&self) -> bool {
        self.extract.as_ref().is_some_and(|e| e.enabled)
    }
}
