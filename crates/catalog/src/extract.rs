use serde::{Deserialize, Serialize};

/// Per-app policy for shaping successful response payloads.
///
/// The aggregation provider's adapters historically diverged on what to
/// do with a success payload: some return it verbatim, some search it
/// recursively for the action's result field, and some insist the
/// payload is a single-key object and unwrap it. The divergence is
/// observable behavior that existing workflows depend on, so it is kept
/// as explicit per-app configuration rather than unified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Return `data` verbatim; the per-action extraction directive is
    /// ignored entirely.
    #[default]
    None,

    /// Depth-first search of the payload for the action's result field.
    /// A found, non-empty value is returned; otherwise an object payload
    /// is unwrapped to a list holding its first entry.
    RecursiveSearch,

    /// Search for the result field, falling back to the raw payload.
    /// When extraction is requested with no named field, a payload that
    /// is not a single-entry container is a fatal error.
    SingleKeyUnwrap,
}

impl ExtractionMode {
    /// String identifier for serialization/logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::RecursiveSearch => "recursive_search",
            Self::SingleKeyUnwrap => "single_key_unwrap",
        }
    }
}
