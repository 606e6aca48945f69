/// Error type for catalog operations.
///
/// Covers construction-time consistency checks and registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An action lists a field key absent from the app's field registry.
    #[error("action `{action_key}` references unknown field `{field_key}`")]
    UnknownField {
        /// The action whose field list is inconsistent.
        action_key: String,
        /// The missing field key.
        field_key: String,
    },

    /// An app declares a default action key absent from its own catalog.
    #[error("default action `{action_key}` is not in the catalog")]
    UnknownDefaultAction {
        /// The missing action key.
        action_key: String,
    },

    /// No app registered under the given name.
    #[error("app not found: `{name}`")]
    AppNotFound {
        /// The requested app name.
        name: String,
    },

    /// An app with the given name is already registered.
    #[error("app already registered: `{name}`")]
    AppAlreadyRegistered {
        /// The conflicting app name.
        name: String,
    },
}

impl CatalogError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownField { .. } | Self::UnknownDefaultAction { .. } => "consistency",
            Self::AppNotFound { .. } | Self::AppAlreadyRegistered { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownField { .. } => "CATALOG_UNKNOWN_FIELD",
            Self::UnknownDefaultAction { .. } => "CATALOG_UNKNOWN_DEFAULT",
            Self::AppNotFound { .. } => "CATALOG_APP_NOT_FOUND",
            Self::AppAlreadyRegistered { .. } => "CATALOG_APP_EXISTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_keys() {
        let err = CatalogError::UnknownField {
            action_key: "X_DO".into(),
            field_key: "X_DO_missing".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("X_DO"));
        assert!(msg.contains("X_DO_missing"));
    }

    #[test]
    fn categories_and_codes_cover_all_variants() {
        let errors = [
            CatalogError::UnknownField {
                action_key: "a".into(),
                field_key: "f".into(),
            },
            CatalogError::UnknownDefaultAction {
                action_key: "a".into(),
            },
            CatalogError::AppNotFound { name: "x".into() },
            CatalogError::AppAlreadyRegistered { name: "x".into() },
        ];

        for err in &errors {
            assert!(!err.category().is_empty());
            assert!(err.code().starts_with("CATALOG_"));
        }
    }
}
