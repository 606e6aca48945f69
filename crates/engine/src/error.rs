//! Error types for action resolution and dispatch.

use thiserror::Error;

/// Errors raised while resolving, dispatching or normalizing an action call.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The selected display name does not correspond to any cataloged action.
    #[error("Invalid action: {display_name}")]
    InvalidAction {
        /// Display name the caller selected.
        display_name: String,
    },

    /// The catalog names an action the backing toolset does not expose.
    ///
    /// This indicates drift between the shipped catalog and the remote
    /// service's action inventory, not a caller mistake.
    #[error("action '{action_key}' is not known to the configured toolset")]
    ConfigurationMismatch {
        /// Catalog key of the missing action.
        action_key: String,
    },

    /// Result extraction was requested without a field name and the payload
    /// does not have exactly one entry.
    #[error("expected a single-key result payload for '{action_key}', got keys {keys:?}")]
    UnexpectedShape {
        /// Catalog key of the action that produced the payload.
        action_key: String,
        /// Top-level keys observed in the payload.
        keys: Vec<String>,
    },

    /// The underlying call to the toolset failed outright.
    #[error("Failed to execute {display_name}: {message}")]
    Transport {
        /// Display name of the action being executed.
        display_name: String,
        /// Message from the underlying failure.
        message: String,
    },
}

impl EngineError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAction { .. } => "ENGINE_INVALID_ACTION",
            Self::ConfigurationMismatch { .. } => "ENGINE_CONFIGURATION_MISMATCH",
            Self::UnexpectedShape { .. } => "ENGINE_UNEXPECTED_SHAPE",
            Self::Transport { .. } => "ENGINE_TRANSPORT",
        }
    }

    /// Whether the error was caused by caller input rather than the
    /// environment.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidAction { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_action_message_names_the_selection() {
        let err = EngineError::InvalidAction {
            display_name: "Create Post".into(),
        };
        assert_eq!(err.to_string(), "Invalid action: Create Post");
        assert!(err.is_user_error());
    }

    #[test]
    fn transport_message_wraps_the_cause() {
        let err = EngineError::Transport {
            display_name: "Get User".into(),
            message: "connection reset".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to execute Get User: connection reset"
        );
        assert_eq!(err.code(), "ENGINE_TRANSPORT");
        assert!(!err.is_user_error());
    }
}
